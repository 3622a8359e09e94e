use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    pub id: i64,
    pub event_id: i64,          // ⇔ participants.event_id
    pub name: String,           // ⇔ participants.name (unique per event)
    pub registered_at: String,  // ⇔ participants.registered_at (TEXT, ISO8601)
}

impl Participant {
    pub fn new(event_id: i64, name: &str) -> Self {
        Self {
            id: 0,
            event_id,
            name: name.to_string(),
            registered_at: Local::now().to_rfc3339(),
        }
    }
}
