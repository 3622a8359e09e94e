use super::{sport::Sport, venue::Venue};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,                     // ⇔ events.title
    pub sport: Sport,                      // ⇔ events.sport ('foot' | 'basket' | ...)
    pub date: NaiveDateTime,               // ⇔ events.date (TEXT "YYYY-MM-DD HH:MM")
    pub end_date: Option<NaiveDateTime>,   // ⇔ events.end_date (TEXT, nullable)
    pub address: String,                   // ⇔ events.address
    pub city: String,                      // ⇔ events.city
    pub postcode: String,                  // ⇔ events.postcode
    pub latitude: Option<f64>,             // ⇔ events.latitude (REAL, nullable)
    pub longitude: Option<f64>,            // ⇔ events.longitude (REAL, nullable)
    pub max_participants: Option<i64>,     // ⇔ events.max_participants (INT, nullable)
    pub is_reserved: bool,                 // ⇔ events.is_reserved (INT 0/1)
    pub organizer: String,                 // ⇔ events.organizer
    pub description: String,               // ⇔ events.description

    pub source: String,     // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// High-level constructor for events created from the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: &str,
        sport: Sport,
        date: NaiveDateTime,
        end_date: Option<NaiveDateTime>,
        venue: Venue,
        latitude: Option<f64>,
        longitude: Option<f64>,
        max_participants: Option<i64>,
        is_reserved: bool,
        organizer: &str,
        description: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            sport,
            date,
            end_date,
            address: venue.address,
            city: venue.city,
            postcode: venue.postcode,
            latitude,
            longitude,
            max_participants,
            is_reserved,
            organizer: organizer.to_string(),
            description: description.to_string(),
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn venue(&self) -> Venue {
        Venue::new(&self.address, &self.city, &self.postcode)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.date.format("%H:%M").to_string()
    }

    pub fn end_time_str(&self) -> String {
        match self.end_date {
            Some(e) => e.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
