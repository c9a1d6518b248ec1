use crate::export::ExportFormat;
use crate::models::punch_type::PunchType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunch
/// CLI punch clock: clock in/out, lunch breaks and weekly goals on SQLite
#[derive(Parser)]
#[command(
    name = "rpunch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A punch clock CLI: register clock-in, lunch and clock-out punches and track worked hours using SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a punch now (clock-in, lunch-out, lunch-in, clock-out)
    Punch {
        /// in | lunch-out | lunch-in | out (aliases: clock-in, lunch, back, clock-out)
        kind: PunchType,
    },

    /// Add or replace a punch manually on any date
    Add {
        /// Date of the punch (YYYY-MM-DD)
        date: String,

        /// Punch type (in, lunch-out, lunch-in, out)
        kind: PunchType,

        /// Time of the punch (HH:MM)
        time: String,

        #[arg(long = "replace", help = "Overwrite the time of an existing punch")]
        replace: bool,
    },

    /// Delete one punch, or every punch of a date
    Del {
        /// Date of the punches (YYYY-MM-DD)
        date: String,

        /// Punch type to delete; all punches of the date when omitted
        kind: Option<PunchType>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show today's punches and worked time
    Status {
        #[arg(long = "watch", short = 'w', help = "Refresh every second while working")]
        watch: bool,
    },

    /// List punches per day
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        today: bool,
    },

    /// Weekly summary with a bar chart of the worked hours
    Week {
        /// Any date of the week (YYYY-MM-DD); the current week when omitted
        date: Option<String>,

        #[arg(long = "no-chart", help = "Do not draw the bar chart")]
        no_chart: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export punches
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

        #[arg(long = "days", short = 'd', help = "One row per day instead of one per punch")]
        days: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
