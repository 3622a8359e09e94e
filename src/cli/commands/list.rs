use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::conflict::effective_end;
use crate::db::board::load_messages;
use crate::db::participants::{count_participants, load_participants};
use crate::db::pool::DbPool;
use crate::db::queries::load_events_by_day;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::sport::Sport;
use crate::utils::colors::{RESET, color_for_sport, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{Column, Table, bold, mins2readable};
use crate::utils::time::minutes_between;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        sport,
        city,
        now: l_now,
        details,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = if *l_now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let sport_filter = sport.as_deref().and_then(Sport::from_code);

        let mut shown = 0usize;
        for d in dates {
            let mut events = load_events_by_day(&mut pool, &d)?;

            if let Some(s) = sport_filter {
                events.retain(|ev| ev.sport == s);
            }
            if let Some(c) = city {
                events.retain(|ev| &ev.city == c);
            }

            if events.is_empty() {
                continue;
            }

            shown += events.len();
            print_day(&mut pool, &d, &events, cfg, *details)?;
        }

        if shown == 0 {
            println!("No events for the selected period.");
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    use crate::errors::AppError;

    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidDate);
    }

    date::current_month_dates().map_err(AppError::InvalidDate)
}

fn print_day(
    pool: &mut DbPool,
    d: &NaiveDate,
    events: &[Event],
    cfg: &Config,
    details: bool,
) -> AppResult<()> {
    println!("\n📅 {}", bold(&d.to_string()));

    let mut table = Table::new(vec![
        Column {
            header: "ID".into(),
            width: 4,
        },
        Column {
            header: "START".into(),
            width: 6,
        },
        Column {
            header: "END".into(),
            width: 6,
        },
        Column {
            header: "DUR".into(),
            width: 8,
        },
        Column {
            header: "SPORT".into(),
            width: 9,
        },
        Column {
            header: "TITLE".into(),
            width: 24,
        },
        Column {
            header: "VENUE".into(),
            width: 34,
        },
        Column {
            header: "WHO".into(),
            width: 10,
        },
    ]);

    for ev in events {
        let reserved = if ev.is_reserved { " 🔒" } else { "" };

        // end may be implicit; the duration never is
        let end = effective_end(ev.date, ev.end_date);
        let duration = mins2readable(minutes_between(ev.date, end), false);

        let who = match ev.max_participants {
            Some(max) => format!("{}/{}", count_participants(pool, ev.id)?, max),
            None => format!("{}", count_participants(pool, ev.id)?),
        };

        table.add_row(vec![
            ev.id.to_string(),
            ev.time_str(),
            colorize_optional(&ev.end_time_str()),
            duration,
            format!(
                "{}{}{}",
                color_for_sport(ev.sport.code()),
                ev.sport.code(),
                RESET
            ),
            format!("{}{}", ev.title, reserved),
            format!("{}", ev.venue()),
            who,
        ]);
    }

    print!("{}", table.render(&cfg.separator_char));

    if details {
        for ev in events {
            let participants = load_participants(pool, ev.id)?;
            let messages = load_messages(pool, ev.id)?;

            if participants.is_empty() && messages.is_empty() {
                continue;
            }

            println!("\n#{} {}:", ev.id, ev.title);
            for p in &participants {
                println!("  👤 {}", p.name);
            }
            for (author, body, _) in &messages {
                println!("  💬 {}: {}", author, body);
            }
        }
    }

    Ok(())
}
