use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sift", bin_name = "sift", version)]
#[command(about = "Search people, files and chats from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (JSON array of records), overrides the configured one
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Use the built-in demo catalog
    #[arg(long, global = true, conflicts_with = "catalog")]
    pub demo: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What to show: the search box, the selected tab and any tabs to hide first.
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Search text (case-insensitive substring of the name)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Tab to select (all, people, files, chats)
    #[arg(short, long)]
    pub tab: Option<String>,

    /// Hide a category before selecting (repeatable)
    #[arg(long = "hide", value_name = "CATEGORY")]
    pub hide: Vec<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tab row and matching records (default)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show only the tab row with counts
    Tabs {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Read events from stdin, one per line, and redraw after each
    Session,

    /// Print the demo catalog as JSON
    Demo {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (tab-order, hidden, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
