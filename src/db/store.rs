//! The key-value seam the record slots are written through.

use crate::errors::AppResult;
use std::collections::HashMap;

/// A persistent string-keyed, string-valued store with an audit trail.
///
/// `DbPool` is the real backend; `MemoryStore` backs unit tests.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
    pub audit_trail: Vec<(String, String, String)>,
    /// Number of successful `set` calls, to check write-through.
    pub writes: usize,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit_trail
            .push((operation.to_string(), target.to_string(), message.to_string()));
        Ok(())
    }
}
