use crate::core::audit_quietly;
use crate::db::slots::{SLOT_CLOSING, commit_closing};
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::{AppState, ClosingDraft};
use crate::ui::messages::info;

pub struct ClosingLogic;

impl ClosingLogic {
    /// Record a cash closing.
    ///
    /// With `persist` the `datosCierre` slot is committed so the closing
    /// survives a reload; without it the closing lives only in the returned
    /// state, long enough to be exported.
    pub fn register<S: KvStore + ?Sized>(
        store: &mut S,
        state: &AppState,
        draft: ClosingDraft,
        persist: bool,
    ) -> AppResult<AppState> {
        let next = state.clone().with_closing(draft.into_summary());

        if persist {
            commit_closing(store, &next)?;
            audit_quietly(store, "close", SLOT_CLOSING, "Cash closing registered");
        } else {
            info("Closing kept for this export only (persist_closing = false).");
        }

        Ok(next)
    }
}
