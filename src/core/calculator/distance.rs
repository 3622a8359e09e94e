//! Great-circle distance ranking for the nearby search.

use crate::models::event::Event;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two WGS84 points.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone)]
pub struct NearbyEvent {
    pub event: Event,
    pub distance_km: f64,
}

/// Keep the events within `radius_km` of the point, sorted by
/// ascending distance. Events without coordinates are dropped.
pub fn rank_by_distance(events: &[Event], lat: f64, lon: f64, radius_km: f64) -> Vec<NearbyEvent> {
    let mut out: Vec<NearbyEvent> = events
        .iter()
        .filter_map(|ev| {
            let (ev_lat, ev_lon) = ev.coordinates()?;
            let distance_km = haversine_km(lat, lon, ev_lat, ev_lon);
            (distance_km <= radius_km).then(|| NearbyEvent {
                event: ev.clone(),
                distance_km,
            })
        })
        .collect();

    out.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    out
}
