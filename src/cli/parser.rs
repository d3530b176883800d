use clap::{Parser, Subcommand};

/// Command-line interface definition for getime
/// Duration notation and billing-period helpers for Gétime
#[derive(Parser)]
#[command(
    name = "getime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Gétime helpers: convert duration notations and compute billing periods",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Convert between duration notations and decimal hours
    Hours {
        #[command(subcommand)]
        action: HoursAction,
    },

    /// Billing months: tokens, selectable window, clamping
    Month {
        #[command(subcommand)]
        action: MonthAction,
    },

    /// Turn an inclusive calendar range into a half-open UTC range
    Range {
        /// YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same form
        range: String,

        #[arg(long, help = "Print the range as JSON")]
        json: bool,
    },

    /// Keep the labels matching a query (accent and case insensitive)
    Filter {
        query: String,

        #[arg(required = true)]
        labels: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum HoursAction {
    /// Parse "1h30", "1:30", "90m" or "1.5" into decimal hours
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Render decimal hours
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long, conflicts_with = "hm", help = "Two-decimal notation (1.50)")]
        decimal: bool,

        #[arg(long, conflicts_with = "notation", help = "Hour-minute notation (1h30)")]
        hm: bool,

        #[arg(
            long,
            value_name = "CODE",
            conflicts_with = "decimal",
            help = "Notation code: hm / hour_minute or dec / decimal"
        )]
        notation: Option<String>,
    },

    /// Sum several durations (blank entries are skipped)
    Sum {
        #[arg(required = true, allow_hyphen_values = true)]
        texts: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum MonthAction {
    /// Print the UTC start instant of a YYYY-MM token
    Parse { token: String },

    /// Show the selectable billing window
    Window {
        #[arg(long, help = "Selected month (YYYY-MM), default: current month")]
        selected: Option<String>,

        #[arg(long, help = "Last selectable month (YYYY-MM), default: last completed month")]
        max: Option<String>,

        #[arg(long, help = "Print the window as JSON")]
        json: bool,
    },

    /// Month a date falls in, clamped down to the last selectable month
    Clamp {
        /// YYYY-MM-DD or RFC 3339 instant
        date: String,

        #[arg(long, help = "Last selectable month (YYYY-MM), default: last completed month")]
        max: Option<String>,
    },

    /// Print the last completed month
    Last,
}
