use crate::core::audit_quietly;
use crate::core::calculator::punctuality::{Punctuality, annotate, evaluate};
use crate::db::slots::{SLOT_PERSONNEL, commit_personnel};
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::{AppState, PersonnelDraft, PersonnelEntry};
use crate::ui::messages::{success, warning};
use crate::utils::time::format_hhmm;
use chrono::NaiveTime;

pub struct StaffLogic;

impl StaffLogic {
    /// Turn a draft into the entry that will be stored: the lateness
    /// message, if any, is prepended to the note.
    pub fn admit(draft: PersonnelDraft, expected_start: NaiveTime) -> (PersonnelEntry, Punctuality) {
        let outcome = evaluate(draft.check_in, expected_start);
        let entry = PersonnelEntry {
            name: draft.name,
            check_in: draft.check_in,
            check_out: draft.check_out,
            note: annotate(&draft.note, outcome),
        };
        (entry, outcome)
    }

    pub fn add<S: KvStore + ?Sized>(
        store: &mut S,
        state: &AppState,
        draft: PersonnelDraft,
        expected_start: NaiveTime,
    ) -> AppResult<AppState> {
        let (entry, outcome) = Self::admit(draft, expected_start);
        let summary = format!(
            "{} {} → {}",
            entry.name,
            format_hhmm(entry.check_in),
            format_hhmm(entry.check_out)
        );

        let next = state.clone().with_personnel(entry);
        commit_personnel(store, &next)?;

        let audit_msg = if outcome.is_late() {
            format!("{summary} ({} min late)", outcome.delay_minutes())
        } else {
            summary.clone()
        };
        audit_quietly(store, "staff", SLOT_PERSONNEL, &audit_msg);
        success(format!("Attendance saved: {summary}."));
        if outcome.is_late() {
            warning(outcome.message());
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::slots::hydrate;
    use crate::db::store::MemoryStore;
    use crate::utils::time::parse_hhmm;

    fn seven() -> NaiveTime {
        parse_hhmm("07:00").unwrap()
    }

    #[test]
    fn late_arrival_note_is_prefixed() {
        let draft = PersonnelDraft::parse("Ana", "09:05", "17:00", "traffic").unwrap();
        let (entry, outcome) = StaffLogic::admit(draft, seven());
        assert!(outcome.is_late());
        assert_eq!(entry.note, "Arrived 2 hour(s) and 5 minute(s) late. traffic");
    }

    #[test]
    fn on_time_note_is_unchanged() {
        let draft = PersonnelDraft::parse("Ana", "07:00", "15:00", "ok").unwrap();
        let (entry, _) = StaffLogic::admit(draft, seven());
        assert_eq!(entry.note, "ok");
    }

    #[test]
    fn expected_start_is_a_parameter() {
        let draft = PersonnelDraft::parse("Ana", "08:10", "15:00", "").unwrap();
        let (entry, _) = StaffLogic::admit(draft, parse_hhmm("08:00").unwrap());
        assert_eq!(entry.note, "Arrived 10 minute(s) late.");
    }

    #[test]
    fn add_commits_personnel_slot() {
        let mut store = MemoryStore::default();
        let state = AppState::default();
        let draft = PersonnelDraft::parse("Luis", "07:45", "15:00", "").unwrap();

        let next = StaffLogic::add(&mut store, &state, draft, seven()).unwrap();
        assert_eq!(next.personnel.len(), 1);
        assert!(state.personnel.is_empty());
        assert_eq!(hydrate(&mut store).unwrap().personnel, next.personnel);
        assert_eq!(next.personnel[0].note, "Arrived 45 minute(s) late.");
        assert!(store.audit_trail[0].2.ends_with("(45 min late)"));
    }

    #[test]
    fn each_submission_appends_one_entry() {
        let mut store = MemoryStore::default();
        let first = PersonnelDraft::parse("Eva", "06:55", "14:00", "").unwrap();
        let mut state = StaffLogic::add(&mut store, &AppState::default(), first, seven()).unwrap();
        let before = state.personnel.clone();

        let arrivals = ["07:00", "07:01", "08:30", "06:00"];
        for (i, check_in) in arrivals.iter().enumerate() {
            let draft = PersonnelDraft::parse("Luis", check_in, "15:00", "").unwrap();
            state = StaffLogic::add(&mut store, &state, draft, seven()).unwrap();

            assert_eq!(state.personnel.len(), before.len() + i + 1);
            assert_eq!(hydrate(&mut store).unwrap().personnel, state.personnel);
        }

        assert_eq!(state.personnel[..before.len()], before[..]);
        assert_eq!(state.personnel[2].note, "Arrived 1 minute(s) late.");
        assert_eq!(store.writes, 1 + arrivals.len());
    }
}
