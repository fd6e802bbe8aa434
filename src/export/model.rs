// src/export/model.rs

use crate::core::calculator::closing_series::closing_series;
use crate::models::{CashClosingSummary, ExpenseRecord};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

pub const SHEET_NAME: &str = "Gastos";

/// Zero-based row of the detail header (cell A7).
pub const DETAIL_ORIGIN_ROW: u32 = 6;

pub const EXPENSES_LABEL: &str = "EXPENSES";

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec!["Concept", "Amount"]
}

pub(crate) fn detail_headers() -> Vec<&'static str> {
    vec!["Date", "Time", "Category", "Description", "Amount"]
}

/// One typed spreadsheet cell. Serializers decide how each kind is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Header(&'static str),
    Text(String),
    Amount(Decimal),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Cell {
    /// Plain-text rendering, as used by the CSV serializer.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Header(h) => h.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Amount(a) => a.normalize().to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Time(t) => t.format("%H:%M:%S").to_string(),
        }
    }
}

/// Closing report laid out as a single sheet:
///
/// ```text
/// row 0      Concept | Amount
/// rows 1..=5 four closing amounts, then "EXPENSES" with an empty amount
/// row 6      Date | Time | Category | Description | Amount
/// rows 7..   one row per expense, in stored order
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub summary: Vec<Vec<Cell>>,
    pub detail: Vec<Vec<Cell>>,
}

impl ExportDocument {
    pub fn build(closing: &CashClosingSummary, records: &[ExpenseRecord]) -> Self {
        let mut summary: Vec<Vec<Cell>> = vec![summary_headers().into_iter().map(Cell::Header).collect()];

        for point in closing_series(closing) {
            summary.push(vec![Cell::Text(point.label.to_string()), Cell::Amount(point.value)]);
        }
        summary.push(vec![Cell::Text(EXPENSES_LABEL.to_string()), Cell::Empty]);

        let mut detail: Vec<Vec<Cell>> = vec![detail_headers().into_iter().map(Cell::Header).collect()];
        detail.extend(records.iter().map(expense_to_row));

        Self { summary, detail }
    }

    /// Summary data rows, without the column header.
    pub fn summary_rows(&self) -> &[Vec<Cell>] {
        &self.summary[1..]
    }

    /// Every row with its zero-based sheet position.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &Vec<Cell>)> {
        let summary = self.summary.iter().enumerate().map(|(i, r)| (i as u32, r));
        let detail = self
            .detail
            .iter()
            .enumerate()
            .map(|(i, r)| (DETAIL_ORIGIN_ROW + i as u32, r));
        summary.chain(detail)
    }

    /// Widest column count across both blocks.
    pub fn width(&self) -> usize {
        self.rows().map(|(_, r)| r.len()).max().unwrap_or(0)
    }
}

pub(crate) fn expense_to_row(r: &ExpenseRecord) -> Vec<Cell> {
    vec![
        Cell::Date(r.date),
        Cell::Time(r.time),
        Cell::Text(r.category.clone()),
        Cell::Text(r.description.clone()),
        Cell::Amount(r.amount),
    ]
}

/// Flat structure for the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct ExpenseExport {
    pub date: String,
    pub time: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub concept: String,
    pub amount: Option<f64>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ClosingExport {
    pub sheet: &'static str,
    pub summary: Vec<SummaryExport>,
    pub expenses: Vec<ExpenseExport>,
}

impl From<&ExportDocument> for ClosingExport {
    fn from(doc: &ExportDocument) -> Self {
        use rust_decimal::prelude::ToPrimitive;

        let amount = |c: &Cell| match c {
            Cell::Amount(a) => a.to_f64(),
            _ => None,
        };

        let summary = doc
            .summary_rows()
            .iter()
            .map(|row| SummaryExport {
                concept: row[0].as_text(),
                amount: amount(&row[1]),
            })
            .collect();

        let expenses = doc.detail[1..]
            .iter()
            .map(|row| ExpenseExport {
                date: row[0].as_text(),
                time: row[1].as_text(),
                category: row[2].as_text(),
                description: row[3].as_text(),
                amount: amount(&row[4]).unwrap_or(0.0),
            })
            .collect();

        Self {
            sheet: SHEET_NAME,
            summary,
            expenses,
        }
    }
}
