//! End-to-end tests of the `check` command against a seeded database.

use predicates::str::contains;

mod common;
use common::{add_event_at, init_db, rsm};

fn check_args<'a>(db_path: &'a str, date: &'a str, at: &'a str) -> Vec<&'a str> {
    vec![
        "--db", db_path, "check", date, "--at", at, "--address", "12 rue des Sports", "--city",
        "Nantes", "--postcode", "44000",
    ]
}

#[test]
fn check_empty_venue_reports_available() {
    let db_path = common::setup_test_db("check_available");
    init_db(&db_path);

    rsm()
        .args(check_args(&db_path, "2026-09-01", "15:00"))
        .args(["--until", "17:00"])
        .assert()
        .success()
        .stdout(contains("Aucun événement"))
        .stdout(contains("status: available"));
}

#[test]
fn check_overlapping_slot_reports_occupied() {
    let db_path = common::setup_test_db("check_occupied");
    init_db(&db_path);
    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Foot du mardi");

    rsm()
        .args(check_args(&db_path, "2026-09-01", "15:00"))
        .args(["--until", "17:00"])
        .assert()
        .success()
        .stdout(contains("occupe déjà ce créneau"))
        .stdout(contains("status: occupied"))
        .stdout(contains("1 conflicting"));
}

#[test]
fn check_touching_slot_reports_partial() {
    let db_path = common::setup_test_db("check_partial");
    init_db(&db_path);
    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Foot du mardi");

    rsm()
        .args(check_args(&db_path, "2026-09-01", "16:00"))
        .args(["--until", "18:00"])
        .assert()
        .success()
        .stdout(contains("aucun ne chevauche"))
        .stdout(contains("status: partial"));
}

#[test]
fn check_other_postcode_reports_available() {
    let db_path = common::setup_test_db("check_other_postcode");
    init_db(&db_path);
    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Foot du mardi");

    rsm()
        .args([
            "--db",
            &db_path,
            "check",
            "2026-09-01",
            "--at",
            "15:00",
            "--address",
            "12 rue des Sports",
            "--city",
            "Nantes",
            "--postcode",
            "44100",
        ])
        .assert()
        .success()
        .stdout(contains("status: available"));
}

#[test]
fn check_without_until_uses_two_hour_slot() {
    let db_path = common::setup_test_db("check_implicit_duration");
    init_db(&db_path);
    // short event with an explicit end at 10:30
    add_event_at(&db_path, "2026-09-01", "10:00", "10:30", "Réveil musculaire");

    // candidate 11:30 → implicit window 11:30-13:30, no overlap
    rsm()
        .args(check_args(&db_path, "2026-09-01", "11:30"))
        .assert()
        .success()
        .stdout(contains("status: partial"));

    // candidate 09:00 → implicit window 09:00-11:00, overlaps 10:00-10:30
    rsm()
        .args(check_args(&db_path, "2026-09-01", "09:00"))
        .assert()
        .success()
        .stdout(contains("status: occupied"));
}

#[test]
fn check_with_missing_venue_fields_skips_the_check() {
    let db_path = common::setup_test_db("check_incomplete");
    init_db(&db_path);

    // no --city / --postcode → short-circuit, bare status line only
    rsm()
        .args([
            "--db",
            &db_path,
            "check",
            "2026-09-01",
            "--at",
            "15:00",
            "--address",
            "12 rue des Sports",
        ])
        .assert()
        .success()
        .stdout(contains("status: available"));
}
