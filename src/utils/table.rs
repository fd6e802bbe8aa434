//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Cells wider than this wrap onto continuation lines; `None` = no limit.
    pub wrap: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            wrap: None,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            wrap: Some(width.max(1)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Split every cell into its display lines (wrapping where configured).
    fn cell_lines(&self, row: &[String]) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                match col.wrap {
                    Some(w) if !cell.is_empty() => textwrap::wrap(cell, w)
                        .into_iter()
                        .map(|c| c.into_owned())
                        .collect(),
                    _ => vec![cell.to_string()],
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let wrapped: Vec<Vec<Vec<String>>> = self.rows.iter().map(|r| self.cell_lines(r)).collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                wrapped
                    .iter()
                    .flat_map(|r| r[i].iter())
                    .map(|l| UnicodeWidthStr::width(l.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for cells in &wrapped {
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                for (cell, w) in cells.iter().zip(&widths) {
                    let text = cell.get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_right(text, *w));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
