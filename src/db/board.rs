//! Per-event message board (append-only, chronological).

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

pub fn post_message(conn: &Connection, event_id: i64, author: &str, body: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO board (event_id, author, body, posted_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![event_id, author, body, now])?;

    Ok(())
}

/// (author, body, posted_at), oldest first.
pub fn load_messages(pool: &mut DbPool, event_id: i64) -> AppResult<Vec<(String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT author, body, posted_at FROM board
         WHERE event_id = ?1 ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([event_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
