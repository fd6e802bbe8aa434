use crate::cli::parser::{Commands, StaffAction};
use crate::config::Config;
use crate::core::staff::StaffLogic;
use crate::errors::{AppError, AppResult};
use crate::models::PersonnelDraft;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hhmm, parse_hhmm};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { action } = cmd {
        match action {
            StaffAction::Add {
                name,
                check_in,
                check_out,
                note,
            } => {
                let expected = parse_hhmm(&cfg.expected_start).map_err(|e| {
                    AppError::Config(format!("expected_start '{}': {e}", cfg.expected_start))
                })?;
                let draft = PersonnelDraft::parse(name, check_in, check_out, note)?;

                let (mut pool, state) = super::open_session(cfg)?;
                StaffLogic::add(&mut pool, &state, draft, expected)?;
            }
            StaffAction::List => list(cfg)?,
        }
    }

    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let (_pool, state) = super::open_session(cfg)?;

    if state.personnel.is_empty() {
        println!("No attendance entries recorded.");
        return Ok(());
    }

    header(format!("Attendance ({})", state.personnel.len()));

    let mut table = Table::new(vec![
        Column::new("Name"),
        Column::new("In"),
        Column::new("Out"),
        Column::wrapped("Note", cfg.description_width),
    ]);
    for p in &state.personnel {
        table.add_row(vec![
            p.name.clone(),
            format_hhmm(p.check_in),
            format_hhmm(p.check_out),
            p.note.clone(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
