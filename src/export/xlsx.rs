// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{
    DATE_FORMAT, TIME_FORMAT, date_to_excel_serial, time_to_excel_serial,
};
use crate::export::model::{Cell, ExportDocument, SHEET_NAME};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: single `Gastos` sheet, styled headers, auto column widths.
pub(crate) fn export_xlsx(doc: &ExportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut col_widths: Vec<usize> = vec![0; doc.width()];

    // ---------------------------
    // Rows (summary block, then detail table at A7)
    // ---------------------------
    for (row, cells) in doc.rows() {
        for (col, cell) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, &header_format)?;
            col_widths[col] = col_widths[col].max(display_width(cell));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write a single cell, encoding dates/times as Excel serials and
/// amounts as numbers so the sheet stays computable.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    header_format: &Format,
) -> AppResult<()> {
    let bordered = Format::new().set_border(FormatBorder::Thin);

    match cell {
        Cell::Empty => {}
        Cell::Header(h) => {
            worksheet
                .write_with_format(row, col, *h, header_format)
                .map_err(to_export_error)?;
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &bordered)
                .map_err(to_export_error)?;
        }
        Cell::Amount(a) => {
            let fmt = bordered.set_align(FormatAlign::Right);
            let value = a
                .to_f64()
                .ok_or_else(|| AppError::ExportFailure(format!("amount out of range: {a}")))?;
            worksheet
                .write_number_with_format(row, col, value, &fmt)
                .map_err(to_export_error)?;
        }
        Cell::Date(d) => {
            let fmt = bordered.set_num_format(DATE_FORMAT);
            worksheet
                .write_number_with_format(row, col, date_to_excel_serial(*d), &fmt)
                .map_err(to_export_error)?;
        }
        Cell::Time(t) => {
            let fmt = bordered.set_num_format(TIME_FORMAT);
            worksheet
                .write_number_with_format(row, col, time_to_excel_serial(*t), &fmt)
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

fn display_width(cell: &Cell) -> usize {
    UnicodeWidthStr::width(cell.as_text().as_str())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::ExportFailure(e.to_string())
}
