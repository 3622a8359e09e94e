use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let ev = load_event(&mut pool, *id)?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete event #{} '{}' ({})? Participants and board messages go with it.",
            id,
            ev.title,
            ev.date.format("%Y-%m-%d %H:%M")
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        delete_event(&mut pool, *id)?;

        audit(
            &pool.conn,
            "del",
            &format!("event {}", id),
            &format!("Deleted '{}'", ev.title),
        )?;

        success(format!("Event #{} '{}' has been deleted.", id, ev.title));
    }

    Ok(())
}
