//! CLI argument definitions using clap
//!
//! - alumnet                       # Interactive mode (default)
//! - alumnet search "query"        # One-shot search
//! - alumnet history/config        # Utility commands

use alumnet_core::{DateRange, TypeFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alumnet")]
#[command(about = "Alumnet - search posts, alumni, events and jobs")]
#[command(
    long_about = r#"Alumnet - search posts, alumni, events and jobs

USAGE:
  alumnet                               # Start interactive search
  alumnet search "data science"         # One-shot search
  alumnet search priya --type alumni    # Only alumni

UTILITY COMMANDS:
  alumnet history list                  # Show recent searches
  alumnet config init                   # Create config file
  alumnet config show                   # Show effective config

For detailed help: alumnet --help"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (JSON, TOML or YAML)
    #[arg(long, global = true, env = "ALUMNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search every collection once and print the ranked results
    Search {
        /// Query text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive search prompt
    Interactive {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Inspect or edit the search history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Filter flags shared by the search commands
#[derive(clap::Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Result type: all, post, alumni, event, job or message
    #[arg(long = "type", value_name = "TYPE", default_value = "all")]
    pub kind: TypeFilter,

    /// Only alumni, events and jobs in this location
    #[arg(long)]
    pub location: Option<String>,

    /// Only alumni from this graduation batch
    #[arg(long)]
    pub batch: Option<String>,

    /// Date window: any, today, week, month or year
    #[arg(long, value_name = "RANGE", default_value = "any")]
    pub date_range: DateRange,
}

#[derive(Subcommand, Clone)]
pub enum HistoryAction {
    /// List remembered queries, most recent first
    List,

    /// Forget every remembered query
    Clear,

    /// Forget one query
    Remove {
        /// The exact query to forget
        query: String,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,

    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file
        #[arg(long, default_value = alumnet_core::config::DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
