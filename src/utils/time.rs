//! Time utilities: strict HH:MM parsing and minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("valid HH:MM regex"));

/// Parse a wall-clock time written exactly as `HH:MM`.
///
/// Single-digit hours, seconds, or surrounding text are rejected so that a
/// typo never turns into a silently wrong lateness.
pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    let caps = HHMM
        .captures(t.trim())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    let h: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    let m: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;

    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Serde adapter storing a `NaiveTime` as `"HH:MM"`, the format the
/// personnel slot has always used.
pub mod serde_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_hhmm(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_hhmm(&raw).map_err(de::Error::custom)
    }
}
