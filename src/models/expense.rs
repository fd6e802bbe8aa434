use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One logged outflow (or inflow, when negative).
///
/// Field names on disk match the `gastos` slot written by earlier
/// versions: `fecha`, `hora`, `tipo`, `descripcion`, `monto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "fecha")]
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(rename = "hora")]
    pub time: NaiveTime, // "HH:MM:SS"
    #[serde(rename = "tipo")]
    pub category: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "monto", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl ExpenseRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
