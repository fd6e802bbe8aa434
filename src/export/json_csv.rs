// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ClosingExport, ExportDocument};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(doc: &ExportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let view = ClosingExport::from(doc);
    let json_data = serde_json::to_string_pretty(&view)
        .map_err(|e| AppError::ExportFailure(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: the same grid as the spreadsheet, one CSV line per sheet row.
/// Rows keep their own width, so the writer runs in flexible mode.
pub(crate) fn export_csv(doc: &ExportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::ExportFailure(format!("CSV open error: {e}")))?;

    for (_, row) in doc.rows() {
        let fields: Vec<String> = row.iter().map(|c| c.as_text()).collect();
        wtr.write_record(&fields)
            .map_err(|e| AppError::ExportFailure(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::ExportFailure(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
