//! Venue availability checker.
//!
//! Given a candidate slot and the events already scheduled at the same
//! venue, classifies the venue as available, partially booked (same
//! venue, no time overlap) or occupied. The comparison works on
//! half-open intervals: a slot starting exactly when another ends is
//! not a conflict.

use crate::db::store::VenueSource;
use crate::models::venue::Venue;
use crate::models::venue_report::VenueReport;
use chrono::{Duration, NaiveDateTime};

/// Implicit duration of a slot without an explicit end: exactly 2 hours.
pub const DEFAULT_SLOT_MINUTES: i64 = 120;

/// Raw venue record as the store returns it. Legacy documents may miss
/// the start instant or carry an unparsable one; those records are
/// skipped, never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSlot {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl VenueSlot {
    pub fn new(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }
}

/// Explicit end when present, start + 2h otherwise.
pub fn effective_end(start: NaiveDateTime, end: Option<NaiveDateTime>) -> NaiveDateTime {
    end.unwrap_or(start + Duration::minutes(DEFAULT_SLOT_MINUTES))
}

/// Half-open interval overlap between [a_start, a_end) and
/// [b_start, b_end). Touching endpoints do not overlap.
// TODO: the signup page copy advertises a 5 minute buffer between two
// bookings at the same venue; the comparison below applies none. Align
// the copy or the arithmetic with product before enforcing anything.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Classify a candidate slot against the slots already present at the
/// venue. Pure: works only on data already fetched.
pub fn classify(
    candidate_start: NaiveDateTime,
    candidate_end: Option<NaiveDateTime>,
    existing: &[VenueSlot],
) -> VenueReport {
    let cand_end = effective_end(candidate_start, candidate_end);

    let mut total_events = 0usize;
    let mut conflicts = 0usize;

    for slot in existing {
        let Some(start) = slot.start else {
            continue; // unusable record
        };
        total_events += 1;

        let end = effective_end(start, slot.end);
        if overlaps(candidate_start, cand_end, start, end) {
            conflicts += 1;
        }
    }

    if total_events == 0 {
        VenueReport::available(0)
    } else if conflicts > 0 {
        VenueReport::occupied(total_events, conflicts)
    } else {
        VenueReport::partial(total_events)
    }
}

/// Fetch-then-classify wrapper around [`classify`].
///
/// - An incomplete venue (any empty field) short-circuits: no query is
///   performed and the report carries an empty message.
/// - A store failure degrades to the permissive report instead of
///   propagating: creation is never blocked by an infrastructure error.
///
/// Read-only: the source is never written to.
pub fn check_venue(
    source: &mut dyn VenueSource,
    venue: &Venue,
    candidate_start: NaiveDateTime,
    candidate_end: Option<NaiveDateTime>,
) -> VenueReport {
    if !venue.is_complete() {
        return VenueReport::skipped();
    }

    match source.slots_at_venue(venue) {
        Ok(slots) => classify(candidate_start, candidate_end, &slots),
        Err(_) => VenueReport::degraded(),
    }
}
