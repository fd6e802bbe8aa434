//! Typed form inputs, one per mutating action.
//!
//! Each draft is built from raw user strings and is only constructed when
//! every field is valid, so the core never sees a half-parsed value.

use super::{CashClosingSummary, ExpenseRecord};
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_hhmm;
use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Parse a raw amount. Empty or non-numeric input is rejected, and so is
/// any value that would not read back unchanged from the JSON number it
/// is stored as.
pub fn parse_amount(field: &str, raw: &str) -> AppResult<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }

    let amount = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| AppError::InvalidInput(format!("{field} must be a number, got '{raw}'")))?;

    if !survives_storage(amount) {
        return Err(AppError::InvalidInput(format!(
            "{field} has too many significant digits to be stored exactly: '{raw}'"
        )));
    }
    Ok(amount)
}

/// Amounts are persisted as JSON floats; the value must come back equal.
fn survives_storage(amount: Decimal) -> bool {
    amount
        .to_f64()
        .and_then(|f| Decimal::from_str(&f.to_string()).ok())
        == Some(amount)
}

fn required(field: &str, raw: &str) -> AppResult<String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }
    Ok(s.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

impl ExpenseDraft {
    pub fn parse(category: &str, description: &str, amount: &str) -> AppResult<Self> {
        Ok(Self {
            category: required("category", category)?,
            description: description.trim().to_string(),
            amount: parse_amount("amount", amount)?,
        })
    }

    /// Stamp the draft with the save instant.
    pub fn stamp(self, now: NaiveDateTime) -> ExpenseRecord {
        ExpenseRecord {
            date: now.date(),
            time: now.time(),
            category: self.category,
            description: self.description,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingDraft(pub CashClosingSummary);

impl ClosingDraft {
    pub fn parse(distributed: &str, drawer: &str, remaining: &str, transfers: &str) -> AppResult<Self> {
        Ok(Self(CashClosingSummary {
            distributed_cash: parse_amount("distributed cash", distributed)?,
            drawer_cash: parse_amount("drawer cash", drawer)?,
            remaining_cash: parse_amount("remaining cash", remaining)?,
            total_transfers: parse_amount("total transfers", transfers)?,
        }))
    }

    pub fn into_summary(self) -> CashClosingSummary {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelDraft {
    pub name: String,
    pub check_in: NaiveTime,
    pub check_out: NaiveTime,
    pub note: String,
}

impl PersonnelDraft {
    pub fn parse(name: &str, check_in: &str, check_out: &str, note: &str) -> AppResult<Self> {
        Ok(Self {
            name: required("name", name)?,
            check_in: parse_hhmm(check_in)?,
            check_out: parse_hhmm(check_out)?,
            note: note.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn expense_draft_requires_category_and_numeric_amount() {
        assert!(matches!(
            ExpenseDraft::parse("  ", "x", "10"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            ExpenseDraft::parse("food", "x", "ten"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            ExpenseDraft::parse("food", "x", ""),
            Err(AppError::InvalidInput(_))
        ));

        let d = ExpenseDraft::parse(" food ", " bread ", "-2.50").unwrap();
        assert_eq!(d.category, "food");
        assert_eq!(d.description, "bread");
        assert_eq!(d.amount, Decimal::from_str("-2.5").unwrap());
    }

    #[test]
    fn amounts_that_would_not_reload_exactly_are_rejected() {
        for raw in ["12345678901234567.89", "0.1234567890123456789"] {
            assert!(matches!(
                parse_amount("amount", raw),
                Err(AppError::InvalidInput(msg)) if msg.contains("significant digits")
            ));
        }

        assert_eq!(parse_amount("amount", "19.90").unwrap(), Decimal::from_str("19.9").unwrap());
        assert_eq!(parse_amount("amount", "1e3").unwrap(), Decimal::from(1000));
        assert!(parse_amount("amount", "-0.01").is_ok());
    }

    #[test]
    fn stamping_uses_the_save_instant() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(18, 4, 9)
            .unwrap();
        let rec = ExpenseDraft::parse("fuel", "", "40").unwrap().stamp(now);
        assert_eq!(rec.date_str(), "2025-03-14");
        assert_eq!(rec.time_str(), "18:04:09");
    }

    #[test]
    fn closing_draft_rejects_any_bad_field() {
        assert!(ClosingDraft::parse("1", "2", "3", "4").is_ok());
        assert!(matches!(
            ClosingDraft::parse("1", "2", "x", "4"),
            Err(AppError::InvalidInput(msg)) if msg.contains("remaining cash")
        ));
    }

    #[test]
    fn personnel_draft_validates_times() {
        assert!(matches!(
            PersonnelDraft::parse("Ana", "7:5", "15:00", ""),
            Err(AppError::InvalidTime(_))
        ));
        assert!(matches!(
            PersonnelDraft::parse("", "07:05", "15:00", ""),
            Err(AppError::InvalidInput(_))
        ));
        let d = PersonnelDraft::parse("Ana", "07:05", "15:00", "keys").unwrap();
        assert_eq!(d.note, "keys");
    }
}
