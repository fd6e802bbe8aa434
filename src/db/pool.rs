//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::log::ttlog;
use crate::db::store::KvStore;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and make sure the schema is current.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(pool)
    }

    #[cfg(test)]
    pub(crate) fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl KvStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![key, value, now],
        )?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
