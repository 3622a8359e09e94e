use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::board::{load_messages, post_message};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_event;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Post to or print an event's message board.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Board {
        id,
        post,
        author,
        print,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let ev = load_event(&mut pool, *id)?;

        if let Some(body) = post {
            post_message(&pool.conn, *id, author, body)?;

            audit(
                &pool.conn,
                "board",
                &format!("event {}", id),
                &format!("{} posted on '{}'", author, ev.title),
            )?;

            success(format!("💬 Message posted on '{}'.", ev.title));
        }

        if *print || post.is_none() {
            let messages = load_messages(&mut pool, *id)?;

            if messages.is_empty() {
                println!("No messages on '{}' yet.", ev.title);
                return Ok(());
            }

            println!("💬 Board of '{}':\n", ev.title);
            for (author, body, posted_at) in &messages {
                let ts = chrono::DateTime::parse_from_rfc3339(posted_at)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|_| posted_at.clone());
                println!("  [{}] {}: {}", ts, author, body);
            }
        }
    }

    Ok(())
}
