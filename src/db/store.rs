//! Store seam for the availability checker.
//!
//! The checker never talks to SQLite directly: it receives a
//! `VenueSource` so tests can substitute an in-memory (or failing)
//! implementation for the production database.

use crate::core::calculator::conflict::VenueSlot;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::venue::Venue;
use crate::utils::time::parse_datetime;
use rusqlite::params;

pub trait VenueSource {
    /// Every record stored at exactly this venue (address, city and
    /// postcode compared byte for byte).
    fn slots_at_venue(&mut self, venue: &Venue) -> AppResult<Vec<VenueSlot>>;
}

impl VenueSource for DbPool {
    fn slots_at_venue(&mut self, venue: &Venue) -> AppResult<Vec<VenueSlot>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT date, end_date FROM events
             WHERE address = ?1 AND city = ?2 AND postcode = ?3",
        )?;

        // Lenient mapping: a record whose date does not parse is still
        // returned, with no start, and the checker skips it.
        let rows = stmt.query_map(
            params![venue.address, venue.city, venue.postcode],
            |row| {
                let start_raw: String = row.get(0)?;
                let end_raw: Option<String> = row.get(1)?;
                Ok(VenueSlot {
                    start: parse_datetime(&start_raw),
                    end: end_raw.as_deref().and_then(parse_datetime),
                })
            },
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
