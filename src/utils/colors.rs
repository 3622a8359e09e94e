/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::venue_report::VenueAvailability;

/// Availability color: free → green, partial/degraded → yellow,
/// occupied → red.
pub fn color_for_availability(status: VenueAvailability) -> &'static str {
    match status {
        VenueAvailability::Available => GREEN,
        VenueAvailability::Partial => YELLOW,
        VenueAvailability::Occupied => RED,
        VenueAvailability::DegradedAvailable => YELLOW,
    }
}

pub fn color_for_sport(code: &str) -> &'static str {
    match code {
        "foot" => GREEN,
        "basket" => YELLOW,
        "tennis" => CYAN,
        "running" => MAGENTA,
        "velo" => BLUE,
        "natation" => CYAN,
        _ => RESET,
    }
}

/// Grey out placeholder values ("--:--", empty, "0") in listings.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
