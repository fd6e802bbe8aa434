pub mod closing;
pub mod drafts;
pub mod expense;
pub mod personnel;
pub mod state;

pub use closing::CashClosingSummary;
pub use drafts::{ClosingDraft, ExpenseDraft, PersonnelDraft};
pub use expense::ExpenseRecord;
pub use personnel::PersonnelEntry;
pub use state::AppState;
