// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{event_to_row, get_headers};
use crate::export::{EventExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with styling and auto column widths.
pub(crate) fn export_xlsx(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if events.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    // ---------------------------
    // Rows
    // ---------------------------
    let cell_format = Format::new().set_border(FormatBorder::Thin);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (r, ev) in events.iter().enumerate() {
        let row = event_to_row(ev);
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_with_format((r + 1) as u32, c as u16, cell, &cell_format)
                .map_err(to_io_app_error)?;

            if cell.width() > widths[c] {
                widths[c] = cell.width();
            }
        }
    }

    // ---------------------------
    // Auto width (+2 padding)
    // ---------------------------
    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w + 2) as f64)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("Invalid output path: {}", path.display())))
}

fn to_io_app_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
