use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local wall-clock instant, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// ISO date used in export file names (`gastos_2025-06-18.xlsx`).
pub fn iso_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
