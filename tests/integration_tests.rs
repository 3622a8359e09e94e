use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event_at, init_db, rsm};

#[test]
fn test_init_creates_database() {
    let db_path = common::setup_test_db("init");

    rsm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_events() {
    let db_path = common::setup_test_db("add_list");
    init_db(&db_path);

    add_event_at(&db_path, "2026-08-31", "18:00", "20:00", "Cinq contre cinq");
    add_event_at(&db_path, "2026-09-15", "18:00", "20:00", "Foot en salle");

    rsm()
        .args(["--db", &db_path, "list", "--period", "2026-08:2026-09"])
        .assert()
        .success()
        .stdout(contains("2026-08-31"))
        .stdout(contains("Cinq contre cinq"))
        .stdout(contains("2026-09-15"))
        .stdout(contains("Foot en salle"));
}

#[test]
fn test_list_filter_by_period_excludes_other_years() {
    let db_path = common::setup_test_db("list_year");
    init_db(&db_path);

    add_event_at(&db_path, "2026-01-10", "18:00", "20:00", "Janvier");
    add_event_at(&db_path, "2025-12-31", "18:00", "20:00", "Décembre");

    rsm()
        .args(["--db", &db_path, "list", "--period", "2026"])
        .assert()
        .success()
        .stdout(contains("Janvier").and(contains("Décembre").not()));
}

#[test]
fn test_list_filter_by_sport() {
    let db_path = common::setup_test_db("list_sport");
    init_db(&db_path);

    add_event_at(&db_path, "2026-09-01", "18:00", "20:00", "Foot du soir");

    rsm()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-09-01",
            "--at",
            "09:00",
            "--until",
            "10:00",
            "--title",
            "Course matinale",
            "--sport",
            "running",
            "--address",
            "Parc de Procé",
            "--city",
            "Nantes",
            "--postcode",
            "44100",
        ])
        .assert()
        .success();

    rsm()
        .args([
            "--db",
            &db_path,
            "list",
            "--period",
            "2026-09",
            "--sport",
            "running",
        ])
        .assert()
        .success()
        .stdout(contains("Course matinale").and(contains("Foot du soir").not()));
}

#[test]
fn test_add_warns_on_occupied_slot_but_creates() {
    let db_path = common::setup_test_db("add_occupied");
    init_db(&db_path);

    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Premier");

    // second event overlapping the first at the same venue
    rsm()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-09-01",
            "--at",
            "15:00",
            "--until",
            "17:00",
            "--title",
            "Deuxième",
            "--address",
            "12 rue des Sports",
            "--city",
            "Nantes",
            "--postcode",
            "44000",
        ])
        .assert()
        .success()
        .stdout(contains("occupe déjà ce créneau"))
        .stdout(contains("created despite the occupied slot"));

    // both events exist
    rsm()
        .args(["--db", &db_path, "list", "--period", "2026-09-01"])
        .assert()
        .success()
        .stdout(contains("Premier").and(contains("Deuxième")));
}

#[test]
fn test_add_requires_venue_fields() {
    let db_path = common::setup_test_db("add_missing_venue");
    init_db(&db_path);

    rsm()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-09-01",
            "--at",
            "15:00",
            "--title",
            "Sans adresse",
        ])
        .assert()
        .failure()
        .stderr(contains("--address"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = common::setup_test_db("add_bad_date");
    init_db(&db_path);

    rsm()
        .args([
            "--db",
            &db_path,
            "add",
            "not-a-date",
            "--at",
            "15:00",
            "--title",
            "X",
            "--address",
            "a",
            "--city",
            "b",
            "--postcode",
            "c",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_edit_moves_an_event() {
    let db_path = common::setup_test_db("edit_event");
    init_db(&db_path);

    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "À déplacer");

    rsm()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-09-02",
            "--at",
            "10:00",
            "--edit",
            "--id",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    rsm()
        .args(["--db", &db_path, "list", "--period", "2026-09-02"])
        .assert()
        .success()
        .stdout(contains("À déplacer"));

    rsm()
        .args(["--db", &db_path, "list", "--period", "2026-09-01"])
        .assert()
        .success()
        .stdout(contains("No events for the selected period."));
}

#[test]
fn test_del_removes_event_after_confirmation() {
    let db_path = common::setup_test_db("del_event");
    init_db(&db_path);

    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "À supprimer");

    rsm()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rsm()
        .args(["--db", &db_path, "list", "--period", "2026-09-01"])
        .assert()
        .success()
        .stdout(contains("No events for the selected period."));
}

#[test]
fn test_del_aborts_without_confirmation() {
    let db_path = common::setup_test_db("del_abort");
    init_db(&db_path);

    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Conservé");

    rsm()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rsm()
        .args(["--db", &db_path, "list", "--period", "2026-09-01"])
        .assert()
        .success()
        .stdout(contains("Conservé"));
}

#[test]
fn test_del_unknown_event_fails() {
    let db_path = common::setup_test_db("del_unknown");
    init_db(&db_path);

    rsm()
        .args(["--db", &db_path, "del", "99"])
        .assert()
        .failure()
        .stderr(contains("Event not found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = common::setup_test_db("log_ops");
    init_db(&db_path);

    add_event_at(&db_path, "2026-09-01", "14:00", "16:00", "Loggé");

    rsm()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = common::setup_test_db("db_info");
    common::init_db_with_data(&db_path);

    rsm()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("2"));
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let db_path = common::setup_test_db("db_check");
    init_db(&db_path);

    rsm()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
