use chrono::NaiveDate;
use rsportmeet::core::calculator::stats::aggregate;
use rsportmeet::models::event::Event;
use rsportmeet::models::sport::Sport;
use rsportmeet::models::venue::Venue;

use predicates::str::contains;

mod common;
use common::{init_db, rsm};

fn event(sport: Sport, city: &str, day: u32, reserved: bool) -> Event {
    let date = NaiveDate::from_ymd_opt(2026, 9, day)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    Event::new(
        0,
        "Match",
        sport,
        date,
        None,
        Venue::new("1 rue du Stade", city, "44000"),
        None,
        None,
        None,
        reserved,
        "",
        "",
    )
}

#[test]
fn aggregate_counts_and_groups() {
    let events = vec![
        event(Sport::Football, "Nantes", 1, false),
        event(Sport::Football, "Nantes", 2, true),
        event(Sport::Tennis, "Rennes", 3, false),
    ];

    let now = NaiveDate::from_ymd_opt(2026, 9, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let stats = aggregate(&events, now);

    assert_eq!(stats.total_events, 3);
    assert_eq!(stats.reserved_events, 1);
    assert_eq!(stats.upcoming_events, 2);
    assert_eq!(stats.past_events, 1);

    // count desc, then name asc
    assert_eq!(
        stats.by_sport,
        vec![("foot".to_string(), 2), ("tennis".to_string(), 1)]
    );
    assert_eq!(
        stats.by_city,
        vec![("Nantes".to_string(), 2), ("Rennes".to_string(), 1)]
    );
}

#[test]
fn aggregate_on_empty_set_is_all_zero() {
    let now = NaiveDate::from_ymd_opt(2026, 9, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let stats = aggregate(&[], now);

    assert_eq!(stats.total_events, 0);
    assert!(stats.by_sport.is_empty());
    assert!(stats.by_city.is_empty());
}

#[test]
fn ties_are_broken_by_name() {
    let events = vec![
        event(Sport::Tennis, "Rennes", 1, false),
        event(Sport::Football, "Nantes", 2, false),
    ];

    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let stats = aggregate(&events, now);

    assert_eq!(
        stats.by_sport,
        vec![("foot".to_string(), 1), ("tennis".to_string(), 1)]
    );
    assert_eq!(
        stats.by_city,
        vec![("Nantes".to_string(), 1), ("Rennes".to_string(), 1)]
    );
}

#[test]
fn stats_command_prints_groups() {
    let db_path = common::setup_test_db("stats_cmd");
    init_db(&db_path);

    common::add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Un");
    common::add_event_at(&db_path, "2026-09-02", "14:00", "16:00", "Deux");

    rsm()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-09-03",
            "--at",
            "09:00",
            "--until",
            "10:00",
            "--title",
            "Course",
            "--sport",
            "running",
            "--address",
            "Parc",
            "--city",
            "Rennes",
            "--postcode",
            "35000",
        ])
        .assert()
        .success();

    rsm()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Event statistics"))
        .stdout(contains("By sport:"))
        .stdout(contains("foot"))
        .stdout(contains("running"))
        .stdout(contains("By city:"))
        .stdout(contains("Nantes"))
        .stdout(contains("Rennes"));
}

#[test]
fn stats_command_respects_period_filter() {
    let db_path = common::setup_test_db("stats_period");
    init_db(&db_path);

    common::add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Septembre");
    common::add_event_at(&db_path, "2026-10-01", "14:00", "16:00", "Octobre");

    let output = rsm()
        .args(["--db", &db_path, "stats", "--period", "2026-09"])
        .output()
        .expect("run stats");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Events:"));
    // one event only in September
    assert!(stdout.contains('1'), "unexpected output:\n{stdout}");
}
