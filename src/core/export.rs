use crate::core::audit_quietly;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportDocument, ExportFormat, write_document};
use crate::models::AppState;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// High-level export logic: closing summary + every stored expense.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the closing report from `state` and write it to `path`.
    ///
    /// Fails with `ExportFailure` when no closing is available. State is
    /// never modified, whatever the outcome.
    pub fn export<S: KvStore + ?Sized>(
        store: &mut S,
        state: &AppState,
        path: &Path,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<PathBuf> {
        let closing = state.closing.as_ref().ok_or_else(|| {
            AppError::ExportFailure("no cash closing registered yet; run `close` first".into())
        })?;

        if state.expenses.is_empty() {
            warning("No expenses recorded: the report will only contain the closing summary.");
        }

        let doc = ExportDocument::build(closing, &state.expenses);
        let written = match write_document(&doc, path, format, force) {
            Ok(p) => p,
            Err(e) => {
                audit_quietly(store, "export_failed", &path.to_string_lossy(), &e.to_string());
                return Err(match e {
                    AppError::ExportFailure(_) => e,
                    other => AppError::ExportFailure(other.to_string()),
                });
            }
        };

        audit_quietly(
            store,
            "export",
            &written.to_string_lossy(),
            &format!(
                "{} export: {} expense(s), {}",
                format.as_str().to_uppercase(),
                state.expenses.len(),
                format.mime()
            ),
        );

        Ok(written)
    }
}
