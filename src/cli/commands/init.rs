use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode),
/// then opens the database and applies pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rcashlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", cfg.database);

    let conn = Connection::open(&cfg.database)?;
    for applied in init_db(&conn)? {
        success(format!("Migration applied: {applied}"));
    }

    if let Err(e) = ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
