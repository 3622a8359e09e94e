pub mod board;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod participants;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;

use crate::errors::AppResult;
use rusqlite::Connection;

/// Convenience used by tests and tooling: insert a minimal event
/// without going through the CLI.
#[allow(clippy::too_many_arguments)]
pub fn add_event(
    conn: &Connection,
    title: &str,
    sport: &str,
    date: &str,
    time: &str,
    end_time: Option<&str>,
    address: &str,
    city: &str,
    postcode: &str,
) -> AppResult<i64> {
    let end_date: Option<String> = end_time.map(|t| format!("{} {}", date, t));

    conn.execute(
        "INSERT INTO events (title, sport, date, end_date, address, city, postcode,
                             is_reserved, organizer, description, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, '', '', 'test', ?8)",
        rusqlite::params![
            title,
            sport,
            format!("{} {}", date, time),
            end_date,
            address,
            city,
            postcode,
            chrono::Local::now().to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}
