// src/export/model.rs

use crate::models::event::Event;
use serde::Serialize;

/// Flat structure for event exports.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub title: String,
    pub sport: String,
    pub date: String,
    pub time: String,
    pub end_time: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub reserved: i64,
    pub max_participants: String,
    pub organizer: String,
}

impl EventExport {
    pub fn from_event(ev: &Event) -> Self {
        Self {
            id: ev.id,
            title: ev.title.clone(),
            sport: ev.sport.code().to_string(),
            date: ev.date_str(),
            time: ev.time_str(),
            end_time: ev.end_time_str(),
            address: ev.address.clone(),
            city: ev.city.clone(),
            postcode: ev.postcode.clone(),
            reserved: if ev.is_reserved { 1 } else { 0 },
            max_participants: ev
                .max_participants
                .map(|m| m.to_string())
                .unwrap_or_default(),
            organizer: ev.organizer.clone(),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "title",
        "sport",
        "date",
        "time",
        "end_time",
        "address",
        "city",
        "postcode",
        "reserved",
        "max_participants",
        "organizer",
    ]
}

/// Convert an export record into a row of strings.
pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.title.clone(),
        e.sport.clone(),
        e.date.clone(),
        e.time.clone(),
        e.end_time.clone(),
        e.address.clone(),
        e.city.clone(),
        e.postcode.clone(),
        e.reserved.to_string(),
        e.max_participants.clone(),
        e.organizer.clone(),
    ]
}
