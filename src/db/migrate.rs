//! Database migration engine. Schema creation and upgrades live here;
//! `init_db` and `db --migrate` both delegate to
//! [`run_pending_migrations`].

use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Always first: migrations audit
/// into it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn events_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `events` table with the modern schema (including
/// coordinates).
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            title            TEXT NOT NULL,
            sport            TEXT NOT NULL CHECK(sport IN ('foot','basket','tennis','running','velo','natation')),
            date             TEXT NOT NULL,
            end_date         TEXT DEFAULT NULL,
            address          TEXT NOT NULL,
            city             TEXT NOT NULL,
            postcode         TEXT NOT NULL,
            latitude         REAL DEFAULT NULL,
            longitude        REAL DEFAULT NULL,
            max_participants INTEGER DEFAULT NULL,
            is_reserved      INTEGER NOT NULL DEFAULT 0,
            organizer        TEXT NOT NULL DEFAULT '',
            description      TEXT DEFAULT '',
            source           TEXT NOT NULL DEFAULT 'cli',
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_venue ON events(address, city, postcode);
        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        "#,
    )?;
    Ok(())
}

fn create_participants_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS participants (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id      INTEGER NOT NULL,
            name          TEXT NOT NULL,
            registered_at TEXT NOT NULL,
            UNIQUE(event_id, name)
        );

        CREATE INDEX IF NOT EXISTS idx_participants_event ON participants(event_id);
        "#,
    )?;
    Ok(())
}

fn create_board_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS board (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id  INTEGER NOT NULL,
            author    TEXT NOT NULL,
            body      TEXT NOT NULL,
            posted_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_board_event ON board(event_id);
        "#,
    )?;
    Ok(())
}

/// Databases created before the nearby search have no coordinate
/// columns; add them in place.
fn migrate_add_coordinates(conn: &Connection) -> AppResult<()> {
    if !table_exists(conn, "events")? {
        return Ok(());
    }

    if events_has_column(conn, "latitude")? {
        return Ok(());
    }

    warning("Adding coordinate columns to events table...");

    conn.execute_batch(
        r#"
        ALTER TABLE events ADD COLUMN latitude REAL DEFAULT NULL;
        ALTER TABLE events ADD COLUMN longitude REAL DEFAULT NULL;
        "#,
    )
    .map_err(|e| AppError::Migration(e.to_string()))?;

    audit(
        conn,
        "migration_applied",
        "events",
        "Added latitude/longitude columns",
    )?;

    Ok(())
}

/// Databases created before reserved slots have no `is_reserved`
/// column; add it in place.
fn migrate_add_is_reserved(conn: &Connection) -> AppResult<()> {
    if !table_exists(conn, "events")? {
        return Ok(());
    }

    if events_has_column(conn, "is_reserved")? {
        return Ok(());
    }

    warning("Adding 'is_reserved' column to events table...");

    conn.execute_batch("ALTER TABLE events ADD COLUMN is_reserved INTEGER NOT NULL DEFAULT 0;")
        .map_err(|e| AppError::Migration(e.to_string()))?;

    audit(
        conn,
        "migration_applied",
        "events",
        "Added is_reserved column",
    )?;

    Ok(())
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let fresh = !table_exists(conn, "events")?;

    create_events_table(conn)?;
    create_participants_table(conn)?;
    create_board_table(conn)?;

    if !fresh {
        migrate_add_coordinates(conn)?;
        migrate_add_is_reserved(conn)?;
    }

    Ok(())
}
