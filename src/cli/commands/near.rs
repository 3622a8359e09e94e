use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::distance::rank_by_distance;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_events;
use crate::errors::AppResult;
use crate::utils::geo::{format_km, parse_latitude, parse_longitude};

/// Find events around a point, closest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Near {
        lat,
        lon,
        radius,
        limit,
    } = cmd
    {
        let lat = parse_latitude(lat)?;
        let lon = parse_longitude(lon)?;
        let radius_km = radius.unwrap_or(cfg.default_radius_km);

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_all_events(&mut pool)?;

        let mut ranked = rank_by_distance(&events, lat, lon, radius_km);
        if let Some(n) = limit {
            ranked.truncate(*n);
        }

        if ranked.is_empty() {
            println!(
                "No events within {} of ({:.4}, {:.4}).",
                format_km(radius_km),
                lat,
                lon
            );
            return Ok(());
        }

        println!(
            "🧭 {} event(s) within {} of ({:.4}, {:.4}):\n",
            ranked.len(),
            format_km(radius_km),
            lat,
            lon
        );

        for item in &ranked {
            let ev = &item.event;
            println!(
                "  {:>8}  #{} {} [{}] {} ({})",
                format_km(item.distance_km),
                ev.id,
                ev.date.format("%Y-%m-%d %H:%M"),
                ev.sport.code(),
                ev.title,
                ev.venue()
            );
        }
    }

    Ok(())
}
