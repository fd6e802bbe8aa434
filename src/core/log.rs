use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

const MAX_OP_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI colour for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "staff" => Colour::Cyan,
        "close" => Colour::Yellow,
        "export" => Colour::Blue,
        "export_failed" | "storage_fallback" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;
        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        print!("{}", Self::render(&rows));
        Ok(())
    }

    /// One line per row: `id: date | op (target) => message`.
    /// Only the operation word is coloured; long targets are truncated.
    pub fn render(rows: &[LogRow]) -> String {
        let op_target: Vec<String> = rows
            .iter()
            .map(|r| {
                let full = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };
                truncate(&full, MAX_OP_WIDTH)
            })
            .collect();

        let op_w = op_target.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (r, visible) in rows.iter().zip(&op_target) {
            let color = color_for_operation(&r.operation);

            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            // padding on the visible width, not the escaped one
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                r.id,
                r.date,
                colored,
                padding,
                r.message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        out
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
    t.push_str("...");
    t
}
