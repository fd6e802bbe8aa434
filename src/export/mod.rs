// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod model;
mod xlsx;

pub use model::{Cell, ExportDocument};

use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => XLSX_MIME,
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// `gastos_2025-06-18.xlsx`
pub fn default_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "gastos_{}.{}",
        crate::utils::date::iso_date(&date),
        format.as_str()
    )
}

/// Write `doc` to `path` in the requested format.
///
/// Refuses to clobber an existing file unless `force` (or the user confirms).
pub fn write_document(
    doc: &ExportDocument,
    path: &Path,
    format: ExportFormat,
    force: bool,
) -> AppResult<PathBuf> {
    fs_utils::ensure_writable(path, force)?;
    fs_utils::ensure_parent_dir(path)?;

    match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(doc, path)?,
        ExportFormat::Csv => json_csv::export_csv(doc, path)?,
        ExportFormat::Json => json_csv::export_json(doc, path)?,
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CashClosingSummary, ExpenseRecord};
    use rust_decimal::Decimal;
    use std::env;
    use std::fs;

    fn sample_doc() -> ExportDocument {
        let at = NaiveDate::from_ymd_opt(2025, 6, 18)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let records = vec![ExpenseRecord {
            date: at.date(),
            time: at.time(),
            category: "food".into(),
            description: "lunch, with comma".into(),
            amount: Decimal::from(12),
        }];
        ExportDocument::build(&CashClosingSummary::default(), &records)
    }

    fn temp_path(name: &str) -> PathBuf {
        let p = env::temp_dir().join(name);
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn default_name_uses_iso_date_and_extension() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        assert_eq!(default_file_name(d, ExportFormat::Xlsx), "gastos_2025-06-18.xlsx");
        assert_eq!(default_file_name(d, ExportFormat::Csv), "gastos_2025-06-18.csv");
        assert_eq!(ExportFormat::Xlsx.mime(), XLSX_MIME);
    }

    #[test]
    fn xlsx_is_a_zip_container() {
        let path = temp_path("rcashlog_unit_export.xlsx");
        write_document(&sample_doc(), &path, ExportFormat::Xlsx, false).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn csv_places_detail_header_on_line_seven() {
        let path = temp_path("rcashlog_unit_export.csv");
        write_document(&sample_doc(), &path, ExportFormat::Csv, false).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Concept,Amount");
        assert_eq!(lines[5], "EXPENSES,");
        assert_eq!(lines[6], "Date,Time,Category,Description,Amount");
        assert_eq!(lines[7], "2025-06-18,12:30:00,food,\"lunch, with comma\",12");
        assert_eq!(lines.len(), 8);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn force_overwrites_existing_file() {
        let path = temp_path("rcashlog_unit_existing.json");
        fs::write(&path, "old").unwrap();

        write_document(&sample_doc(), &path, ExportFormat::Json, true).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["sheet"], "Gastos");
        assert_eq!(v["summary"].as_array().unwrap().len(), 5);
        assert_eq!(v["expenses"][0]["category"], "food");
        fs::remove_file(&path).ok();
    }
}
