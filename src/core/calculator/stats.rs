//! Aggregate statistics over fetched events (dashboard view).

use crate::models::event::Event;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct EventStats {
    pub total_events: usize,
    pub reserved_events: usize,
    pub upcoming_events: usize,
    pub past_events: usize,
    /// (sport code, count), count desc then code asc.
    pub by_sport: Vec<(String, usize)>,
    /// (city, count), count desc then city asc.
    pub by_city: Vec<(String, usize)>,
}

/// Count and group over events already materialized in memory.
/// `now` decides upcoming vs past (an event is upcoming while its
/// start has not passed).
pub fn aggregate(events: &[Event], now: NaiveDateTime) -> EventStats {
    let mut by_sport: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_city: BTreeMap<String, usize> = BTreeMap::new();

    let mut stats = EventStats {
        total_events: events.len(),
        ..Default::default()
    };

    for ev in events {
        if ev.is_reserved {
            stats.reserved_events += 1;
        }
        if ev.date >= now {
            stats.upcoming_events += 1;
        } else {
            stats.past_events += 1;
        }

        *by_sport.entry(ev.sport.code().to_string()).or_default() += 1;
        *by_city.entry(ev.city.clone()).or_default() += 1;
    }

    stats.by_sport = sort_counts(by_sport);
    stats.by_city = sort_counts(by_city);
    stats
}

fn sort_counts(map: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut v: Vec<(String, usize)> = map.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    v
}
