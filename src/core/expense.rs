use crate::core::audit_quietly;
use crate::db::slots::{SLOT_EXPENSES, commit_expenses};
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::{AppState, ExpenseDraft};
use crate::ui::messages::success;
use crate::utils::format_amount;
use chrono::NaiveDateTime;

/// High-level business logic for recording expenses.
pub struct ExpenseLogic;

impl ExpenseLogic {
    /// Stamp the draft with `now`, append it and commit the `gastos` slot.
    ///
    /// Returns the next state; `state` is left as it was if the commit fails.
    pub fn add<S: KvStore + ?Sized>(
        store: &mut S,
        state: &AppState,
        draft: ExpenseDraft,
        now: NaiveDateTime,
    ) -> AppResult<AppState> {
        let record = draft.stamp(now);
        let summary = format!(
            "{} {} ({})",
            record.category,
            format_amount(record.amount),
            record.description
        );

        let next = state.clone().with_expense(record);
        commit_expenses(store, &next)?;

        audit_quietly(store, "add", SLOT_EXPENSES, &summary);
        success(format!(
            "Expense saved on {}: {}.",
            now.format("%Y-%m-%d %H:%M:%S"),
            summary
        ));

        Ok(next)
    }
}
