use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::participants::total_participants;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_events, load_events_between};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let events = match period {
            Some(p) => {
                let dates = if let Some((a, b)) = p.split_once(':') {
                    date::generate_range(a, b).map_err(AppError::InvalidDate)?
                } else {
                    date::generate_from_period(p).map_err(AppError::InvalidDate)?
                };
                let from = *dates.first().unwrap();
                let to = *dates.last().unwrap();
                load_events_between(&mut pool, &from, &to)?
            }
            None => load_all_events(&mut pool)?,
        };

        let now = chrono::Local::now().naive_local();
        let stats = Core::build_stats(&events, now);
        let participants = total_participants(&mut pool)?;

        header("Event statistics");

        println!("{}• Events:{} {}{}{}", CYAN, RESET, GREEN, stats.total_events, RESET);
        println!(
            "{}• Upcoming / past:{} {} / {}",
            CYAN, RESET, stats.upcoming_events, stats.past_events
        );
        println!(
            "{}• Reserved slots:{} {}",
            CYAN, RESET, stats.reserved_events
        );
        println!(
            "{}• Registered participants:{} {}",
            CYAN, RESET, participants
        );

        if !stats.by_sport.is_empty() {
            println!("\n{}By sport:{}", CYAN, RESET);
            for (code, count) in &stats.by_sport {
                println!("  {:<10} {}", code, count);
            }
        }

        if !stats.by_city.is_empty() {
            println!("\n{}By city:{}", CYAN, RESET);
            for (city, count) in &stats.by_city {
                println!("  {:<20} {}", city, count);
            }
        }

        println!();
    }

    Ok(())
}
