use crate::utils::time::minutes_of_day;
use chrono::NaiveTime;
use std::fmt;

/// Outcome of comparing a clock-in against the expected start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuality {
    /// At or before the expected start.
    OnTime,
    Late { hours: i64, minutes: i64 },
}

impl Punctuality {
    pub fn is_late(&self) -> bool {
        matches!(self, Punctuality::Late { .. })
    }

    pub fn delay_minutes(&self) -> i64 {
        match self {
            Punctuality::OnTime => 0,
            Punctuality::Late { hours, minutes } => hours * 60 + minutes,
        }
    }

    /// Human-readable annotation; empty when on time.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Punctuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Punctuality::OnTime => Ok(()),
            Punctuality::Late { hours, minutes } if *hours > 0 => {
                write!(f, "Arrived {hours} hour(s) and {minutes} minute(s) late.")
            }
            Punctuality::Late { minutes, .. } => write!(f, "Arrived {minutes} minute(s) late."),
        }
    }
}

/// Lateness of `check_in` relative to `expected`. Arriving exactly on
/// time is not late.
pub fn evaluate(check_in: NaiveTime, expected: NaiveTime) -> Punctuality {
    let delay = minutes_of_day(check_in) - minutes_of_day(expected);

    if delay <= 0 {
        return Punctuality::OnTime;
    }

    Punctuality::Late {
        hours: delay / 60,
        minutes: delay % 60,
    }
}

/// Prepend the lateness message to a note, separated by one space.
/// On-time arrivals leave the note untouched.
pub fn annotate(note: &str, outcome: Punctuality) -> String {
    if !outcome.is_late() {
        return note.to_string();
    }
    if note.is_empty() {
        return outcome.message();
    }
    format!("{} {}", outcome.message(), note)
}
