// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EventExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::io;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export events.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let events_vec = load_events(pool, date_bounds)?;

        if events_vec.is_empty() {
            warning("⚠️  No events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&events_vec, path)?,
            ExportFormat::Json => export_json(&events_vec, path)?,
            ExportFormat::Xlsx => export_xlsx(&events_vec, path)?,
        }

        Ok(())
    }
}

fn load_events(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EventExport>> {
    let events = match bounds {
        Some((from, to)) => load_events_between(pool, &from, &to)?,
        None => crate::db::queries::load_all_events(pool)?,
    };

    Ok(events.iter().map(EventExport::from_event).collect())
}
