use crate::core::calculator::{conflict, stats};
use crate::db::store::VenueSource;
use crate::models::event::Event;
use crate::models::venue::Venue;
use crate::models::venue_report::VenueReport;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Availability of a venue for a candidate slot. Read-only.
    pub fn check_slot(
        source: &mut dyn VenueSource,
        venue: &Venue,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> VenueReport {
        conflict::check_venue(source, venue, start, end)
    }

    pub fn build_stats(events: &[Event], now: NaiveDateTime) -> stats::EventStats {
        stats::aggregate(events, now)
    }
}
