//! Library-level tests for the venue availability checker.

use chrono::{NaiveDate, NaiveDateTime};
use rsportmeet::core::calculator::conflict::{self, VenueSlot};
use rsportmeet::core::tracker::ReportTracker;
use rsportmeet::db::store::VenueSource;
use rsportmeet::errors::{AppError, AppResult};
use rsportmeet::models::venue::Venue;
use rsportmeet::models::venue_report::{VenueAvailability, VenueReport};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn slot(start: NaiveDateTime, end: Option<NaiveDateTime>) -> VenueSlot {
    VenueSlot::new(start, end)
}

/// In-memory stand-in for the production store.
struct MemorySource {
    venue: Venue,
    slots: Vec<VenueSlot>,
}

impl VenueSource for MemorySource {
    fn slots_at_venue(&mut self, venue: &Venue) -> AppResult<Vec<VenueSlot>> {
        if *venue == self.venue {
            Ok(self.slots.clone())
        } else {
            Ok(Vec::new())
        }
    }
}

/// Store that always fails, to exercise the fail-open path.
struct FailingSource;

impl VenueSource for FailingSource {
    fn slots_at_venue(&mut self, _venue: &Venue) -> AppResult<Vec<VenueSlot>> {
        Err(AppError::Other("store unreachable".into()))
    }
}

fn test_venue() -> Venue {
    Venue::new("12 rue des Sports", "Nantes", "44000")
}

// ---------------------------------------------------------------
// classify
// ---------------------------------------------------------------

#[test]
fn empty_venue_is_available() {
    let report = conflict::classify(dt(2026, 9, 1, 15, 0), None, &[]);

    assert_eq!(report.status, VenueAvailability::Available);
    assert_eq!(report.total_events, 0);
    assert_eq!(report.conflicts, 0);
    assert!(report.message.contains("Aucun événement"));
}

#[test]
fn overlapping_slot_is_occupied() {
    // existing 14:00-16:00, candidate 15:00-17:00 → overlap 15:00-16:00
    let existing = vec![slot(dt(2026, 9, 1, 14, 0), Some(dt(2026, 9, 1, 16, 0)))];
    let report = conflict::classify(
        dt(2026, 9, 1, 15, 0),
        Some(dt(2026, 9, 1, 17, 0)),
        &existing,
    );

    assert_eq!(report.status, VenueAvailability::Occupied);
    assert_eq!(report.total_events, 1);
    assert_eq!(report.conflicts, 1);
    assert!(!report.message.is_empty());
}

#[test]
fn touching_end_boundary_is_partial() {
    // existing 14:00-16:00, candidate starts exactly at 16:00
    let existing = vec![slot(dt(2026, 9, 1, 14, 0), Some(dt(2026, 9, 1, 16, 0)))];
    let report = conflict::classify(
        dt(2026, 9, 1, 16, 0),
        Some(dt(2026, 9, 1, 18, 0)),
        &existing,
    );

    assert_eq!(report.status, VenueAvailability::Partial);
    assert_eq!(report.total_events, 1);
    assert_eq!(report.conflicts, 0);
}

#[test]
fn touching_start_boundary_is_partial() {
    // candidate ends exactly when the existing event starts
    let existing = vec![slot(dt(2026, 9, 1, 14, 0), Some(dt(2026, 9, 1, 16, 0)))];
    let report = conflict::classify(
        dt(2026, 9, 1, 12, 0),
        Some(dt(2026, 9, 1, 14, 0)),
        &existing,
    );

    assert_eq!(report.status, VenueAvailability::Partial);
    assert_eq!(report.conflicts, 0);
}

#[test]
fn records_without_start_are_never_counted() {
    let existing = vec![
        VenueSlot {
            start: None,
            end: None,
        },
        VenueSlot {
            start: None,
            end: Some(dt(2026, 9, 1, 15, 0)),
        },
    ];
    let report = conflict::classify(dt(2026, 9, 1, 15, 0), None, &existing);

    // both records are unusable → the venue counts as empty
    assert_eq!(report.status, VenueAvailability::Available);
    assert_eq!(report.total_events, 0);
}

#[test]
fn unusable_record_is_skipped_but_usable_ones_still_count() {
    let existing = vec![
        VenueSlot {
            start: None,
            end: None,
        },
        slot(dt(2026, 9, 1, 8, 0), Some(dt(2026, 9, 1, 9, 0))),
    ];
    let report = conflict::classify(dt(2026, 9, 1, 15, 0), None, &existing);

    assert_eq!(report.status, VenueAvailability::Partial);
    assert_eq!(report.total_events, 1);
}

#[test]
fn candidate_without_end_lasts_exactly_two_hours() {
    // candidate 11:30 + implicit 2h = 13:30
    let candidate = dt(2026, 9, 1, 11, 30);

    // existing starting exactly at 13:30 → touching, no conflict
    let touching = vec![slot(dt(2026, 9, 1, 13, 30), Some(dt(2026, 9, 1, 14, 30)))];
    let report = conflict::classify(candidate, None, &touching);
    assert_eq!(report.status, VenueAvailability::Partial);

    // existing starting one minute earlier → conflict
    let overlapping = vec![slot(dt(2026, 9, 1, 13, 29), Some(dt(2026, 9, 1, 14, 30)))];
    let report = conflict::classify(candidate, None, &overlapping);
    assert_eq!(report.status, VenueAvailability::Occupied);
}

#[test]
fn existing_without_end_lasts_exactly_two_hours() {
    // existing 10:00 + implicit 2h = 12:00
    let existing = vec![slot(dt(2026, 9, 1, 10, 0), None)];

    // candidate 11:59-13:00 overlaps
    let report = conflict::classify(
        dt(2026, 9, 1, 11, 59),
        Some(dt(2026, 9, 1, 13, 0)),
        &existing,
    );
    assert_eq!(report.status, VenueAvailability::Occupied);

    // candidate 12:00-13:00 only touches
    let report = conflict::classify(
        dt(2026, 9, 1, 12, 0),
        Some(dt(2026, 9, 1, 13, 0)),
        &existing,
    );
    assert_eq!(report.status, VenueAvailability::Partial);
}

#[test]
fn short_existing_event_far_from_implicit_candidate_window() {
    // existing 10:00-10:30 with explicit end; candidate 11:30 without
    // end → window 11:30-13:30, no overlap, venue not empty
    let existing = vec![slot(dt(2026, 9, 1, 10, 0), Some(dt(2026, 9, 1, 10, 30)))];
    let report = conflict::classify(dt(2026, 9, 1, 11, 30), None, &existing);

    assert_eq!(report.status, VenueAvailability::Partial);
    assert_eq!(report.total_events, 1);
    assert_eq!(report.conflicts, 0);
}

#[test]
fn multiple_events_count_conflicts_separately() {
    let existing = vec![
        slot(dt(2026, 9, 1, 14, 0), Some(dt(2026, 9, 1, 16, 0))),
        slot(dt(2026, 9, 1, 15, 30), Some(dt(2026, 9, 1, 17, 30))),
        slot(dt(2026, 9, 1, 8, 0), Some(dt(2026, 9, 1, 9, 0))),
    ];
    let report = conflict::classify(
        dt(2026, 9, 1, 15, 0),
        Some(dt(2026, 9, 1, 17, 0)),
        &existing,
    );

    assert_eq!(report.status, VenueAvailability::Occupied);
    assert_eq!(report.total_events, 3);
    assert_eq!(report.conflicts, 2);
}

// ---------------------------------------------------------------
// check_venue (fetch-then-classify wrapper)
// ---------------------------------------------------------------

#[test]
fn incomplete_venue_short_circuits_without_querying() {
    // FailingSource would degrade the report if the query ran at all
    let mut source = FailingSource;
    let venue = Venue::new("12 rue des Sports", "", "44000");

    let report = conflict::check_venue(&mut source, &venue, dt(2026, 9, 1, 15, 0), None);

    assert_eq!(report.status, VenueAvailability::Available);
    assert!(report.message.is_empty());
}

#[test]
fn store_failure_fails_open() {
    let mut source = FailingSource;

    let report = conflict::check_venue(&mut source, &test_venue(), dt(2026, 9, 1, 15, 0), None);

    assert_eq!(report.status, VenueAvailability::DegradedAvailable);
    assert!(report.status.is_free());
    assert!(report.status.allows_creation());
    assert!(!report.message.is_empty());
}

#[test]
fn different_venue_is_never_fetched() {
    let mut source = MemorySource {
        venue: test_venue(),
        slots: vec![slot(dt(2026, 9, 1, 14, 0), Some(dt(2026, 9, 1, 16, 0)))],
    };

    // same address and city, different postcode
    let other = Venue::new("12 rue des Sports", "Nantes", "44100");
    let report = conflict::check_venue(&mut source, &other, dt(2026, 9, 1, 15, 0), None);

    assert_eq!(report.status, VenueAvailability::Available);
    assert_eq!(report.total_events, 0);
}

#[test]
fn matching_venue_is_classified() {
    let mut source = MemorySource {
        venue: test_venue(),
        slots: vec![slot(dt(2026, 9, 1, 14, 0), Some(dt(2026, 9, 1, 16, 0)))],
    };

    let report = conflict::check_venue(&mut source, &test_venue(), dt(2026, 9, 1, 15, 0), None);

    assert_eq!(report.status, VenueAvailability::Occupied);
}

// ---------------------------------------------------------------
// effective_end / overlaps primitives
// ---------------------------------------------------------------

#[test]
fn effective_end_defaults_to_plus_7200_seconds() {
    let start = dt(2026, 9, 1, 11, 30);
    let end = conflict::effective_end(start, None);
    assert_eq!((end - start).num_milliseconds(), 7_200_000);

    let explicit = dt(2026, 9, 1, 11, 45);
    assert_eq!(conflict::effective_end(start, Some(explicit)), explicit);
}

#[test]
fn overlap_is_strict_on_both_boundaries() {
    let a = dt(2026, 9, 1, 10, 0);
    let b = dt(2026, 9, 1, 12, 0);
    let c = dt(2026, 9, 1, 14, 0);

    assert!(!conflict::overlaps(a, b, b, c));
    assert!(!conflict::overlaps(b, c, a, b));
    assert!(conflict::overlaps(a, c, b, c));
}

// ---------------------------------------------------------------
// last-result-wins tracker
// ---------------------------------------------------------------

#[test]
fn stale_report_is_discarded() {
    let mut tracker = ReportTracker::new();

    let first = tracker.begin();
    let second = tracker.begin();

    // the older check resolves late: it must not be applied
    assert!(!tracker.accept(first, VenueReport::occupied(3, 1)));
    assert!(tracker.current().is_none());

    assert!(tracker.accept(second, VenueReport::available(0)));
    assert_eq!(
        tracker.current().unwrap().status,
        VenueAvailability::Available
    );
}

#[test]
fn accepted_report_stays_until_superseded() {
    let mut tracker = ReportTracker::new();

    let t1 = tracker.begin();
    assert!(tracker.accept(t1, VenueReport::partial(2)));

    let t2 = tracker.begin();
    // the t1 report is still displayed while t2 is in flight
    assert_eq!(tracker.current().unwrap().status, VenueAvailability::Partial);

    assert!(tracker.accept(t2, VenueReport::occupied(2, 1)));
    assert_eq!(
        tracker.current().unwrap().status,
        VenueAvailability::Occupied
    );
}
