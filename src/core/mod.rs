pub mod calculator;
pub mod chart;
pub mod closing;
pub mod expense;
pub mod export;
pub mod log;
pub mod staff;

use crate::db::store::KvStore;
use crate::ui::messages::warning;

/// Audit lines never block the action that produced them.
pub(crate) fn audit_quietly<S: KvStore + ?Sized>(store: &mut S, op: &str, target: &str, msg: &str) {
    if let Err(e) = store.audit(op, target, msg) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
