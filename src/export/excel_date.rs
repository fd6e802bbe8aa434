// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_FORMAT: &str = "hh:mm:ss";

/// Days since the Excel epoch (1899-12-30), as Excel stores dates.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - excel_epoch).num_days() as f64
}

/// Fraction of a day, as Excel stores times.
pub(crate) fn time_to_excel_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
