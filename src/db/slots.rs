//! Record slots: named keys holding JSON text.
//!
//! Reading is forgiving at hydration time (a corrupt slot becomes an empty
//! collection and is reported), writing is strict.

use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::AppState;
use crate::ui::messages::warning;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const SLOT_EXPENSES: &str = "gastos";
pub const SLOT_CLOSING: &str = "datosCierre";
pub const SLOT_PERSONNEL: &str = "personalEntries";

/// Read and decode a slot.
///
/// - missing key, empty text or JSON `null` → `Ok(None)`
/// - undecodable text → `AppError::StorageRead`
pub fn read_slot<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    let raw = match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    serde_json::from_str::<Option<T>>(&raw).map_err(|e| AppError::StorageRead {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

pub fn write_slot<T, S>(store: &mut S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + ?Sized,
    S: KvStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Key the unreadable text of `key` is copied to before it can be overwritten.
pub fn backup_key(key: &str) -> String {
    format!("{key}.corrupt")
}

/// Like `read_slot`, but a corrupt slot falls back to `T::default()`.
/// The raw text is first copied to `backup_key(key)`, so the next commit
/// cannot destroy it; the fallback is reported on screen and in the audit log.
fn read_or_default<T, S>(store: &mut S, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
    S: KvStore + ?Sized,
{
    match read_slot::<T, S>(store, key) {
        Ok(v) => Ok(v.unwrap_or_default()),
        Err(e @ AppError::StorageRead { .. }) => {
            let backup = backup_key(key);
            if let Some(raw) = store.get(key)? {
                store.set(&backup, &raw)?;
            }

            warning(format!(
                "{e}. Starting with no data for '{key}'; previous content saved as '{backup}'."
            ));
            if let Err(log_err) =
                store.audit("storage_fallback", key, &format!("{e} (saved as {backup})"))
            {
                warning(format!("Failed to write internal log: {log_err}"));
            }
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}

/// Load every slot into a fresh state.
pub fn hydrate<S: KvStore + ?Sized>(store: &mut S) -> AppResult<AppState> {
    Ok(AppState {
        expenses: read_or_default(store, SLOT_EXPENSES)?,
        personnel: read_or_default(store, SLOT_PERSONNEL)?,
        closing: read_or_default(store, SLOT_CLOSING)?,
    })
}

pub fn commit_expenses<S: KvStore + ?Sized>(store: &mut S, state: &AppState) -> AppResult<()> {
    write_slot(store, SLOT_EXPENSES, &state.expenses)
}

pub fn commit_personnel<S: KvStore + ?Sized>(store: &mut S, state: &AppState) -> AppResult<()> {
    write_slot(store, SLOT_PERSONNEL, &state.personnel)
}

pub fn commit_closing<S: KvStore + ?Sized>(store: &mut S, state: &AppState) -> AppResult<()> {
    write_slot(store, SLOT_CLOSING, &state.closing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::models::{CashClosingSummary, ExpenseRecord, PersonnelEntry};
    use crate::utils::time::parse_hhmm;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn expense(category: &str, amount: &str) -> ExpenseRecord {
        let at = NaiveDate::from_ymd_opt(2025, 6, 18)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        ExpenseRecord {
            date: at.date(),
            time: at.time(),
            category: category.into(),
            description: "ñandú & co".into(),
            amount: Decimal::from_str(amount).unwrap(),
        }
    }

    #[test]
    fn missing_and_empty_slots_hydrate_empty() {
        let mut store = MemoryStore::default();
        store.set(SLOT_PERSONNEL, "").unwrap();
        store.set(SLOT_CLOSING, "null").unwrap();

        let state = hydrate(&mut store).unwrap();
        assert_eq!(state, AppState::default());
        assert!(store.audit_trail.is_empty());
    }

    #[test]
    fn corrupt_slot_falls_back_and_is_reported() {
        let mut store = MemoryStore::default();
        store.set(SLOT_EXPENSES, "{not json").unwrap();
        // malformed check-in time
        store
            .set(
                SLOT_PERSONNEL,
                r#"[{"nombre":"Ana","entrada":"7","salida":"15:00","observacion":""}]"#,
            )
            .unwrap();

        let state = hydrate(&mut store).unwrap();
        assert!(state.expenses.is_empty());
        assert!(state.personnel.is_empty());
        assert_eq!(store.audit_trail.len(), 2);
        assert_eq!(store.audit_trail[0].0, "storage_fallback");
        assert_eq!(store.audit_trail[0].1, SLOT_EXPENSES);
        assert_eq!(
            store.get(&backup_key(SLOT_EXPENSES)).unwrap().as_deref(),
            Some("{not json")
        );
        assert!(store.get(&backup_key(SLOT_PERSONNEL)).unwrap().is_some());
    }

    #[test]
    fn read_slot_surfaces_storage_read_error() {
        let mut store = MemoryStore::default();
        store
            .set(SLOT_EXPENSES, r#"[{"fecha":"2025-01-01","hora":"10:00:00","tipo":"x","descripcion":"","monto":null}]"#)
            .unwrap();
        let err = read_slot::<Vec<ExpenseRecord>, _>(&store, SLOT_EXPENSES).unwrap_err();
        assert!(matches!(err, AppError::StorageRead { ref key, .. } if key == SLOT_EXPENSES));
    }

    #[test]
    fn persist_then_reload_is_lossless() {
        let mut store = MemoryStore::default();
        let state = AppState {
            expenses: vec![expense("food", "10.25"), expense("refund", "-3"), expense("misc", "0.1")],
            personnel: vec![PersonnelEntry {
                name: "Luis".into(),
                check_in: parse_hhmm("07:45").unwrap(),
                check_out: parse_hhmm("15:30").unwrap(),
                note: "Arrived 45 minute(s) late.".into(),
            }],
            closing: Some(CashClosingSummary {
                distributed_cash: Decimal::from(100),
                drawer_cash: Decimal::from_str("52.5").unwrap(),
                remaining_cash: Decimal::ZERO,
                total_transfers: Decimal::from_str("-1.75").unwrap(),
            }),
        };

        commit_expenses(&mut store, &state).unwrap();
        commit_personnel(&mut store, &state).unwrap();
        commit_closing(&mut store, &state).unwrap();

        let reloaded = hydrate(&mut store).unwrap();
        assert_eq!(reloaded, state);
    }

    #[test]
    fn stored_format_uses_slot_field_names() {
        let mut store = MemoryStore::default();
        let state = AppState {
            expenses: vec![expense("food", "10")],
            ..AppState::default()
        };
        commit_expenses(&mut store, &state).unwrap();

        let raw = store.get(SLOT_EXPENSES).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = &v[0];
        assert_eq!(obj["fecha"], "2025-06-18");
        assert_eq!(obj["hora"], "09:30:15");
        assert_eq!(obj["tipo"], "food");
        assert!(obj["monto"].is_number());
    }

    #[test]
    fn reads_records_written_by_earlier_versions() {
        let mut store = MemoryStore::default();
        store
            .set(
                SLOT_EXPENSES,
                r#"[{"fecha":"2024-11-02","hora":"18:22:05","tipo":"comida","descripcion":"pan","monto":12.5}]"#,
            )
            .unwrap();
        store
            .set(
                SLOT_CLOSING,
                r#"{"dineroReparto":100,"dineroCaja":80.5,"dineroQueda":20,"totalTransferencias":0}"#,
            )
            .unwrap();

        let state = hydrate(&mut store).unwrap();
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses[0].amount, Decimal::from_str("12.5").unwrap());
        assert_eq!(
            state.closing.unwrap().drawer_cash,
            Decimal::from_str("80.5").unwrap()
        );
    }
}
