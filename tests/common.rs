#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsm() -> Command {
    cargo_bin_cmd!("rsportmeet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsportmeet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB (creates schema via `init --test`)
pub fn init_db(db_path: &str) {
    rsm()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an event at the default test venue
pub fn add_event_at(db_path: &str, date: &str, at: &str, until: &str, title: &str) {
    rsm()
        .args([
            "--db",
            db_path,
            "add",
            date,
            "--at",
            at,
            "--until",
            until,
            "--title",
            title,
            "--sport",
            "foot",
            "--address",
            "12 rue des Sports",
            "--city",
            "Nantes",
            "--postcode",
            "44000",
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_event_at(db_path, "2026-09-01", "14:00", "16:00", "Foot du mardi");
    add_event_at(db_path, "2026-09-15", "10:00", "12:00", "Foot du mardi 2");
}

/// Populate many events directly via the library DB API for performance tests
pub fn populate_many_events(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    // ensure initialized
    rsportmeet::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let day = (i % 28) + 1; // 1..28
        let date = format!("2026-11-{day:02}");
        rsportmeet::db::add_event(
            &conn,
            &format!("Event {i}"),
            "foot",
            &date,
            "18:00",
            Some("20:00"),
            "1 avenue du Stade",
            "Rennes",
            "35000",
        )
        .expect("add event");
    }
}
