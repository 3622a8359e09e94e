//! Distance ranking: library-level haversine plus the `near` command.

use rsportmeet::core::calculator::distance::{haversine_km, rank_by_distance};
use rsportmeet::models::event::Event;
use rsportmeet::models::sport::Sport;
use rsportmeet::models::venue::Venue;

use predicates::str::contains;

mod common;
use common::{init_db, rsm};

fn event_at(id: i64, title: &str, lat: Option<f64>, lon: Option<f64>) -> Event {
    let date = chrono::NaiveDate::from_ymd_opt(2026, 9, 1)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    Event::new(
        id,
        title,
        Sport::Football,
        date,
        None,
        Venue::new("1 rue du Stade", "Nantes", "44000"),
        lat,
        lon,
        None,
        false,
        "",
        "",
    )
}

#[test]
fn haversine_paris_lyon_is_about_392_km() {
    // Paris Notre-Dame → Lyon Bellecour
    let d = haversine_km(48.8566, 2.3522, 45.7640, 4.8357);
    assert!((388.0..=397.0).contains(&d), "got {d} km");

    // symmetry
    let back = haversine_km(45.7640, 4.8357, 48.8566, 2.3522);
    assert!((d - back).abs() < 1e-9);
}

#[test]
fn haversine_zero_distance() {
    let d = haversine_km(47.2184, -1.5536, 47.2184, -1.5536);
    assert!(d.abs() < 1e-9);
}

#[test]
fn rank_sorts_ascending_and_applies_radius() {
    // search point: central Nantes
    let events = vec![
        event_at(1, "Loin", Some(47.4), Some(-1.0)),     // ~45 km away
        event_at(2, "Tout près", Some(47.2190), Some(-1.5540)),
        event_at(3, "Proche", Some(47.25), Some(-1.60)),
    ];

    let ranked = rank_by_distance(&events, 47.2184, -1.5536, 20.0);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].event.id, 2);
    assert_eq!(ranked[1].event.id, 3);
    assert!(ranked[0].distance_km <= ranked[1].distance_km);
}

#[test]
fn rank_drops_events_without_coordinates() {
    let events = vec![
        event_at(1, "Sans coordonnées", None, None),
        event_at(2, "Avec", Some(47.2184), Some(-1.5536)),
        event_at(3, "Latitude seule", Some(47.2184), None),
    ];

    let ranked = rank_by_distance(&events, 47.2184, -1.5536, 50.0);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].event.id, 2);
}

fn add_located_event(db_path: &str, title: &str, lat: &str, lon: &str) {
    rsm()
        .args([
            "--db", db_path, "add", "2026-09-01", "--at", "18:00", "--until", "20:00", "--title",
            title, "--address", "1 rue du Stade", "--city", "Nantes", "--postcode", "44000",
            "--lat", lat, "--lon", lon,
        ])
        .assert()
        .success();
}

#[test]
fn near_lists_events_closest_first() {
    let db_path = common::setup_test_db("near_order");
    init_db(&db_path);

    add_located_event(&db_path, "Event lointain", "47.40", "-1.30");
    add_located_event(&db_path, "Event voisin", "47.2190", "-1.5540");

    let output = rsm()
        .args([
            "--db", &db_path, "near", "--lat", "47.2184", "--lon", "-1.5536", "--radius", "50",
        ])
        .output()
        .expect("run near");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let near_pos = stdout.find("Event voisin").expect("nearby event listed");
    let far_pos = stdout.find("Event lointain").expect("far event listed");
    assert!(near_pos < far_pos, "closest event must come first:\n{stdout}");
}

#[test]
fn near_respects_radius() {
    let db_path = common::setup_test_db("near_radius");
    init_db(&db_path);

    add_located_event(&db_path, "Event lointain", "47.40", "-1.30");

    rsm()
        .args([
            "--db", &db_path, "near", "--lat", "47.2184", "--lon", "-1.5536", "--radius", "5",
        ])
        .assert()
        .success()
        .stdout(contains("No events within"));
}

#[test]
fn near_rejects_bad_coordinates() {
    let db_path = common::setup_test_db("near_bad_coords");
    init_db(&db_path);

    rsm()
        .args([
            "--db", &db_path, "near", "--lat", "123.0", "--lon", "-1.5536",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}
