// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{EventExport, event_to_row, get_headers};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for ev in events {
        wtr.write_record(event_to_row(ev))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(events: &[EventExport], path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(events).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
