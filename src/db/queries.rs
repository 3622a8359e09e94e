use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::sport::Sport;
use crate::utils::time::{format_datetime, parse_datetime};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Event> {
    let date_raw: String = row.get("date")?;
    let date = parse_datetime(&date_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_raw.clone())),
        )
    })?;

    let end_raw: Option<String> = row.get("end_date")?;
    let end_date = match end_raw {
        Some(s) => Some(parse_datetime(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(s.clone())),
            )
        })?),
        None => None,
    };

    let sport_raw: String = row.get("sport")?;
    let sport = Sport::from_db_str(&sport_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSport(sport_raw.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        sport,
        date,
        end_date,
        address: row.get("address")?,
        city: row.get("city")?,
        postcode: row.get("postcode")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        max_participants: row.get("max_participants")?,
        is_reserved: row.get::<_, i64>("is_reserved")? == 1,
        organizer: row.get("organizer")?,
        description: row.get("description")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_event(pool: &mut DbPool, id: i64) -> AppResult<Event> {
    let ev = pool
        .conn
        .query_row("SELECT * FROM events WHERE id = ?1", [id], map_row)
        .optional()?;

    ev.ok_or(AppError::EventNotFound(id))
}

/// Events starting on the given day, ordered chronologically.
pub fn load_events_by_day(pool: &mut DbPool, day: &NaiveDate) -> AppResult<Vec<Event>> {
    let lo = format!("{} 00:00", day.format("%Y-%m-%d"));
    let hi = format!("{} 23:59", day.format("%Y-%m-%d"));

    let mut stmt = pool.conn.prepare_cached(
        "SELECT * FROM events
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![lo, hi], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events in the inclusive day range, ordered chronologically.
pub fn load_events_between(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Event>> {
    let lo = format!("{} 00:00", from.format("%Y-%m-%d"));
    let hi = format!("{} 23:59", to.format("%Y-%m-%d"));

    let mut stmt = pool.conn.prepare_cached(
        "SELECT * FROM events
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![lo, hi], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_events(pool: &mut DbPool) -> AppResult<Vec<Event>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT * FROM events ORDER BY date ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (title, sport, date, end_date, address, city, postcode,
                             latitude, longitude, max_participants, is_reserved,
                             organizer, description, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            ev.title,
            ev.sport.to_db_str(),
            format_datetime(ev.date),
            ev.end_date.map(format_datetime),
            ev.address,
            ev.city,
            ev.postcode,
            ev.latitude,
            ev.longitude,
            ev.max_participants,
            if ev.is_reserved { 1 } else { 0 },
            ev.organizer,
            ev.description,
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

/// Update an event (all fields except id)
pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    conn.execute(
        "UPDATE events
         SET title = ?1, sport = ?2, date = ?3, end_date = ?4,
             address = ?5, city = ?6, postcode = ?7,
             latitude = ?8, longitude = ?9, max_participants = ?10,
             is_reserved = ?11, organizer = ?12, description = ?13,
             source = ?14, created_at = ?15
         WHERE id = ?16",
        params![
            ev.title,
            ev.sport.to_db_str(),
            format_datetime(ev.date),
            ev.end_date.map(format_datetime),
            ev.address,
            ev.city,
            ev.postcode,
            ev.latitude,
            ev.longitude,
            ev.max_participants,
            if ev.is_reserved { 1 } else { 0 },
            ev.organizer,
            ev.description,
            ev.source,
            ev.created_at,
            ev.id,
        ],
    )?;
    Ok(())
}

pub fn delete_event(pool: &mut DbPool, id: i64) -> AppResult<()> {
    // participants and board rows go with the event
    pool.conn
        .execute("DELETE FROM participants WHERE event_id = ?1", [id])?;
    pool.conn
        .execute("DELETE FROM board WHERE event_id = ?1", [id])?;

    let n = pool.conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}
