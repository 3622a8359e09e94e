use crate::config::Config;
use crate::core::calculator::conflict;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, load_event, update_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::sport::Sport;
use crate::models::venue::Venue;
use crate::models::venue_report::VenueAvailability;
use crate::ui::messages::success;
use crate::utils::time::at;
use chrono::{NaiveDate, NaiveTime};

/// Fields collected from the `add` command. Everything except the date
/// is optional at the parser level; create mode enforces its own
/// required set, edit mode overlays onto the stored event.
#[derive(Debug, Default, Clone)]
pub struct EventForm {
    pub time: Option<NaiveTime>,
    pub until: Option<NaiveTime>,
    pub title: Option<String>,
    pub sport: Option<Sport>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_participants: Option<i64>,
    pub reserved: bool,
    pub no_reserved: bool,
    pub organizer: Option<String>,
    pub description: Option<String>,
}

impl EventForm {
    fn reserved_override(&self) -> Option<bool> {
        if self.reserved {
            Some(true)
        } else if self.no_reserved {
            Some(false)
        } else {
            None
        }
    }
}

/// High-level business logic for the `add` command.
pub struct CreateLogic;

impl CreateLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        form: EventForm,
        edit_mode: bool,
        edit_id: Option<i64>,
    ) -> AppResult<()> {
        if edit_mode {
            let id = edit_id
                .ok_or_else(|| AppError::Other("Missing --id when using --edit.".into()))?;
            return Self::edit(pool, id, date, form);
        }

        Self::create(pool, cfg, date, form)
    }

    // ------------------------------------------------
    // 1️⃣ CREATE MODE
    // ------------------------------------------------
    fn create(pool: &mut DbPool, cfg: &Config, date: NaiveDate, form: EventForm) -> AppResult<()> {
        let title = form
            .title
            .clone()
            .ok_or_else(|| AppError::Other("Missing --title for a new event.".into()))?;
        let time = form
            .time
            .ok_or_else(|| AppError::InvalidTime("Missing --at for a new event.".into()))?;

        let venue = Venue::new(
            form.address.as_deref().unwrap_or(""),
            form.city.as_deref().unwrap_or(""),
            form.postcode.as_deref().unwrap_or(""),
        );
        if !venue.is_complete() {
            return Err(AppError::Other(
                "A new event needs --address, --city and --postcode.".into(),
            ));
        }

        let sport = match &form.sport {
            Some(s) => *s,
            None => Sport::from_code(&cfg.default_sport)
                .ok_or_else(|| AppError::InvalidSport(cfg.default_sport.clone()))?,
        };

        let start = at(date, time);
        let end = form.until.map(|t| at(date, t));

        //
        // Availability check before booking. Advisory only: an occupied
        // verdict warns the organizer, the event is created anyway.
        //
        let report = conflict::check_venue(pool, &venue, start, end);
        if !report.message.is_empty() {
            println!("{}", report.message);
        }

        let ev = Event::new(
            0,
            &title,
            sport,
            start,
            end,
            venue.clone(),
            form.latitude,
            form.longitude,
            form.max_participants,
            form.reserved,
            form.organizer.as_deref().unwrap_or(""),
            form.description.as_deref().unwrap_or(""),
        );

        insert_event(&pool.conn, &ev)?;
        let id = pool.conn.last_insert_rowid();

        audit(
            &pool.conn,
            "add",
            &format!("event {}", id),
            &format!("{} [{}] at {}", title, sport.code(), venue),
        )?;

        let lock = if ev.is_reserved { " 🔒" } else { "" };
        if report.status == VenueAvailability::Occupied {
            success(format!(
                "📅 Event #{} '{}' created despite the occupied slot.{}",
                id, title, lock
            ));
        } else {
            success(format!("📅 Event #{} '{}' created.{}", id, title, lock));
        }

        Ok(())
    }

    // ------------------------------------------------
    // 2️⃣ EDIT MODE
    // ------------------------------------------------
    fn edit(pool: &mut DbPool, id: i64, date: NaiveDate, form: EventForm) -> AppResult<()> {
        let mut ev = load_event(pool, id)?;

        // DATE / TIME: the positional date always applies; the time
        // only when provided. An existing end follows the event onto
        // the new date, keeping its time of day.
        let time = form.time.unwrap_or_else(|| ev.date.time());
        ev.date = at(date, time);

        ev.end_date = match (form.until, ev.end_date) {
            (Some(until), _) => Some(at(date, until)),
            (None, Some(old)) => Some(at(date, old.time())),
            (None, None) => None,
        };

        if let Some(title) = &form.title {
            ev.title = title.clone();
        }
        if let Some(sport) = form.sport {
            ev.sport = sport;
        }
        if let Some(address) = &form.address {
            ev.address = address.clone();
        }
        if let Some(city) = &form.city {
            ev.city = city.clone();
        }
        if let Some(postcode) = &form.postcode {
            ev.postcode = postcode.clone();
        }
        if let Some(lat) = form.latitude {
            ev.latitude = Some(lat);
        }
        if let Some(lon) = form.longitude {
            ev.longitude = Some(lon);
        }
        if let Some(max) = form.max_participants {
            ev.max_participants = Some(max);
        }
        if let Some(reserved) = form.reserved_override() {
            ev.is_reserved = reserved;
        }
        if let Some(organizer) = &form.organizer {
            ev.organizer = organizer.clone();
        }
        if let Some(description) = &form.description {
            ev.description = description.clone();
        }

        // No availability re-check here: the venue query would match the
        // event being edited and report its own slot as occupied. Use
        // `check` for a preview before moving an event.
        update_event(&pool.conn, &ev)?;

        audit(
            &pool.conn,
            "edit",
            &format!("event {}", id),
            &format!("{} moved to {}", ev.title, ev.date.format("%Y-%m-%d %H:%M")),
        )?;

        success(format!("✏️ Event #{} updated.", id));
        Ok(())
    }
}
