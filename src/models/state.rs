use super::{CashClosingSummary, ExpenseRecord, PersonnelEntry};

/// Everything the application knows, hydrated once per run.
///
/// Mutations go through `core::*Logic`, which update this value and then
/// commit the touched slot; nothing else writes to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub expenses: Vec<ExpenseRecord>,
    pub personnel: Vec<PersonnelEntry>,
    pub closing: Option<CashClosingSummary>,
}

impl AppState {
    pub fn with_expense(mut self, record: ExpenseRecord) -> Self {
        self.expenses.push(record);
        self
    }

    pub fn with_personnel(mut self, entry: PersonnelEntry) -> Self {
        self.personnel.push(entry);
        self
    }

    pub fn with_closing(mut self, closing: CashClosingSummary) -> Self {
        self.closing = Some(closing);
        self
    }
}
