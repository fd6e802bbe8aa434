#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rcashlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcashlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_expense(db_path: &str, category: &str, amount: &str, desc: &str) {
    rcl()
        .args([
            "--db", db_path, "add", "--type", category, "--amount", amount, "--desc", desc,
        ])
        .assert()
        .success();
}

/// Initialize DB and record a small set of expenses
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_expense(db_path, "food", "12.50", "lunch");
    add_expense(db_path, "fuel", "40", "van");
    add_expense(db_path, "food", "7.5", "coffee, pastries");
}

/// Write raw text into a slot, bypassing the CLI.
pub fn put_slot(db_path: &str, key: &str, value: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, '2025-01-01T00:00:00')
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        rusqlite::params![key, value],
    )
    .expect("write slot");
}

pub fn get_slot(db_path: &str, key: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |r| {
        r.get::<_, String>(0)
    })
    .ok()
}
