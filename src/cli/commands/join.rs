use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::participants::{count_participants, register, unregister};
use crate::db::pool::DbPool;
use crate::db::queries::load_event;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register or remove a participant (`join` / `leave`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Join { id, name } => {
            let mut pool = DbPool::new(&cfg.database)?;

            // fails early when the event does not exist
            let ev = load_event(&mut pool, *id)?;

            register(&mut pool, *id, name)?;

            audit(
                &pool.conn,
                "join",
                &format!("event {}", id),
                &format!("{} joined '{}'", name, ev.title),
            )?;

            let count = count_participants(&mut pool, *id)?;
            match ev.max_participants {
                Some(max) => success(format!(
                    "👤 {} joined '{}' ({}/{} participants).",
                    name, ev.title, count, max
                )),
                None => success(format!(
                    "👤 {} joined '{}' ({} participants).",
                    name, ev.title, count
                )),
            }
        }
        Commands::Leave { id, name } => {
            let mut pool = DbPool::new(&cfg.database)?;

            let ev = load_event(&mut pool, *id)?;

            unregister(&mut pool, *id, name)?;

            audit(
                &pool.conn,
                "leave",
                &format!("event {}", id),
                &format!("{} left '{}'", name, ev.title),
            )?;

            success(format!("👋 {} left '{}'.", name, ev.title));
        }
        _ => {}
    }

    Ok(())
}
