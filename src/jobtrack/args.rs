use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(version = get_version())]
#[command(about = "Local-first job application tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new application
    #[command(alias = "a")]
    Add {
        /// Company name
        company: String,

        /// Position title
        position: String,

        /// Apply date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Status (e.g. preparing, applied, interview1, offer, rejected)
        #[arg(long, default_value = "applied")]
        status: String,

        /// Job posting URL
        #[arg(long)]
        link: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List applications
    #[command(alias = "ls")]
    List {
        /// Only show applications with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Search term matched against company and position
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Sort order (date-desc, date-asc, company-asc, company-desc)
        #[arg(long, default_value = "date-desc")]
        sort: String,
    },

    /// Show the full detail of one or more applications
    #[command(alias = "s")]
    Show {
        /// Indexes of the applications (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Edit an application
    #[command(alias = "e")]
    Edit {
        /// Index of the application
        index: usize,

        /// New company name
        #[arg(long)]
        company: Option<String>,

        /// New position title
        #[arg(long)]
        position: Option<String>,

        /// New apply date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New status
        #[arg(long)]
        status: Option<String>,

        /// New job posting URL (pass an empty string to clear)
        #[arg(long)]
        link: Option<String>,

        /// New notes (pass an empty string to clear)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an application (undoable for a short window)
    #[command(alias = "rm")]
    Delete {
        /// Index of the application
        index: usize,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Restore the most recently deleted application
    Undo,

    /// Show summary statistics
    Stats,

    /// Export all applications to CSV
    Export {
        /// Output file (defaults to applications_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., undo-window-secs)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start an interactive session
    Shell,
}
