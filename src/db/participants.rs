use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::participant::Participant;
use rusqlite::params;

pub fn count_participants(pool: &mut DbPool, event_id: i64) -> AppResult<i64> {
    let n: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM participants WHERE event_id = ?1",
        [event_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn is_registered(pool: &mut DbPool, event_id: i64, name: &str) -> AppResult<bool> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT 1 FROM participants WHERE event_id = ?1 AND name = ?2")?;
    Ok(stmt.exists(params![event_id, name])?)
}

/// Register a participant. Rejects duplicates and full events.
pub fn register(pool: &mut DbPool, event_id: i64, name: &str) -> AppResult<()> {
    if is_registered(pool, event_id, name)? {
        return Err(AppError::AlreadyRegistered(name.to_string()));
    }

    let max: Option<i64> = pool.conn.query_row(
        "SELECT max_participants FROM events WHERE id = ?1",
        [event_id],
        |row| row.get(0),
    )?;

    if let Some(max) = max {
        let current = count_participants(pool, event_id)?;
        if current >= max {
            return Err(AppError::EventFull(max));
        }
    }

    let p = Participant::new(event_id, name);
    pool.conn.execute(
        "INSERT INTO participants (event_id, name, registered_at)
         VALUES (?1, ?2, ?3)",
        params![p.event_id, p.name, p.registered_at],
    )?;
    Ok(())
}

pub fn unregister(pool: &mut DbPool, event_id: i64, name: &str) -> AppResult<()> {
    let n = pool.conn.execute(
        "DELETE FROM participants WHERE event_id = ?1 AND name = ?2",
        params![event_id, name],
    )?;
    if n == 0 {
        return Err(AppError::NotRegistered(name.to_string()));
    }
    Ok(())
}

pub fn load_participants(pool: &mut DbPool, event_id: i64) -> AppResult<Vec<Participant>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, event_id, name, registered_at FROM participants
         WHERE event_id = ?1 ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([event_id], |row| {
        Ok(Participant {
            id: row.get(0)?,
            event_id: row.get(1)?,
            name: row.get(2)?,
            registered_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn total_participants(pool: &mut DbPool) -> AppResult<i64> {
    let n: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM participants", [], |row| row.get(0))?;
    Ok(n)
}
