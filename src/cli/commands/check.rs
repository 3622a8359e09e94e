use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::venue::Venue;
use crate::utils::colors::{RESET, color_for_availability};
use crate::utils::date;
use crate::utils::time::{at, parse_optional_time, parse_time};

/// Preview the availability of a venue slot. Read-only: nothing is
/// created, the verdict is printed as the creation flow would show it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        date,
        at: at_str,
        until,
        address,
        city,
        postcode,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t = parse_time(at_str).ok_or_else(|| AppError::InvalidTime(at_str.to_string()))?;
        let until_parsed = parse_optional_time(until.as_ref())?;

        let venue = Venue::new(
            address.as_deref().unwrap_or(""),
            city.as_deref().unwrap_or(""),
            postcode.as_deref().unwrap_or(""),
        );

        let start = at(d, t);
        let end = until_parsed.map(|u| at(d, u));

        let mut pool = DbPool::new(&cfg.database)?;
        let report = Core::check_slot(&mut pool, &venue, start, end);

        if report.message.is_empty() {
            // incomplete venue, nothing was checked
            println!("status: {}", report.status.code());
            return Ok(());
        }

        let color = color_for_availability(report.status);
        println!("{}", report.message);
        println!(
            "{}status: {} ({} event(s) at venue, {} conflicting){}",
            color,
            report.status.code(),
            report.total_events,
            report.conflicts,
            RESET
        );
    }

    Ok(())
}
