pub mod add;
pub mod chart;
pub mod close;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod staff;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::slots::hydrate;
use crate::errors::AppResult;
use crate::export::{ExportFormat, default_file_name};
use crate::models::AppState;
use crate::utils::{date, path::expand_tilde};
use std::path::PathBuf;

/// Open the configured database and hydrate the application state.
pub(crate) fn open_session(cfg: &Config) -> AppResult<(DbPool, AppState)> {
    let mut pool = DbPool::open_initialized(&cfg.database)?;
    let state = hydrate(&mut pool)?;
    Ok((pool, state))
}

/// `--file` when given, otherwise `<export_dir>/gastos_<today>.<ext>`.
pub(crate) fn resolve_output(file: &Option<String>, cfg: &Config, format: ExportFormat) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => expand_tilde(&cfg.export_dir).join(default_file_name(date::today(), format)),
    }
}
