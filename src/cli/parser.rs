use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rsportmeet
/// CLI application to organize sporting meetups with SQLite
#[derive(Parser)]
#[command(
    name = "rsportmeet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple sporting meetup CLI: create events, check venue availability, find nearby meetups",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create or edit a meetup event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "at", help = "Start time (HH:MM)")]
        at: Option<String>,

        /// End time (HH:MM); without it the slot implicitly lasts 2 hours
        #[arg(long = "until", help = "End time (HH:MM)")]
        until: Option<String>,

        #[arg(long = "title", help = "Event title")]
        title: Option<String>,

        /// Sport code (foot, basket, tennis, running, velo, natation)
        #[arg(long = "sport", help = "Sport code: foot, basket, tennis, running, velo, natation")]
        sport: Option<String>,

        #[arg(long = "address", help = "Street address of the venue")]
        address: Option<String>,

        #[arg(long = "city", help = "City of the venue")]
        city: Option<String>,

        #[arg(long = "postcode", help = "Postcode of the venue")]
        postcode: Option<String>,

        #[arg(
            long = "lat",
            allow_hyphen_values = true,
            help = "Venue latitude (decimal degrees)"
        )]
        lat: Option<String>,

        #[arg(
            long = "lon",
            allow_hyphen_values = true,
            help = "Venue longitude (decimal degrees)"
        )]
        lon: Option<String>,

        #[arg(long = "max", help = "Maximum number of participants")]
        max: Option<i64>,

        /// Hold the venue exclusively for the stated window
        #[arg(long = "reserved", help = "Mark the slot as reserved for this event")]
        reserved: bool,

        /// Clear the reserved flag (edit mode)
        #[arg(long = "free", help = "Clear the reserved flag")]
        no_reserved: bool,

        #[arg(long = "by", help = "Organizer name")]
        organizer: Option<String>,

        #[arg(long = "desc", help = "Free-form description")]
        description: Option<String>,

        /// Edit an existing event instead of creating a new one
        #[arg(long = "id", help = "Event id to edit (used with --edit)")]
        edit_id: Option<i64>,

        /// Enable edit mode (requires --id)
        #[arg(
            long = "edit",
            requires = "edit_id",
            help = "Edit an existing event instead of creating a new one"
        )]
        edit: bool,
    },

    /// Preview venue availability for a slot without creating anything
    Check {
        /// Date of the slot (YYYY-MM-DD)
        date: String,

        #[arg(long = "at", help = "Start time (HH:MM)")]
        at: String,

        /// End time (HH:MM); without it the slot implicitly lasts 2 hours
        #[arg(long = "until", help = "End time (HH:MM)")]
        until: Option<String>,

        #[arg(long = "address", help = "Street address of the venue")]
        address: Option<String>,

        #[arg(long = "city", help = "City of the venue")]
        city: Option<String>,

        #[arg(long = "postcode", help = "Postcode of the venue")]
        postcode: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: i64,
    },

    /// List events
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Filter by sport code")]
        sport: Option<String>,

        #[arg(long, help = "Filter by city (exact match)")]
        city: Option<String>,

        #[arg(long = "today", help = "Show only today's events")]
        now: bool,

        #[arg(long = "details", help = "Show participants and board messages")]
        details: bool,
    },

    /// Find events near a point, sorted by distance
    Near {
        #[arg(
            long = "lat",
            allow_hyphen_values = true,
            help = "Latitude of the search point"
        )]
        lat: String,

        #[arg(
            long = "lon",
            allow_hyphen_values = true,
            help = "Longitude of the search point"
        )]
        lon: String,

        #[arg(long = "radius", help = "Search radius in km (default from config)")]
        radius: Option<f64>,

        #[arg(long = "limit", help = "Maximum number of results")]
        limit: Option<usize>,
    },

    /// Register a participant for an event
    Join {
        /// Event id
        id: i64,

        /// Participant name
        name: String,
    },

    /// Remove a participant from an event
    Leave {
        /// Event id
        id: i64,

        /// Participant name
        name: String,
    },

    /// Post to or print an event's message board
    Board {
        /// Event id
        id: i64,

        #[arg(long = "post", help = "Message to post")]
        post: Option<String>,

        #[arg(long = "by", help = "Author of the message", default_value = "anonymous")]
        author: String,

        #[arg(long = "print", help = "Print the board")]
        print: bool,
    },

    /// Show aggregate statistics over events
    Stats {
        #[arg(long, short, help = "Limit stats to a year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export event data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
