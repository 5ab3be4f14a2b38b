//! Alumnet CLI application
//!
//! Search the alumni network from the terminal.
//!
//! # Modes
//!
//! ## 1. Interactive Mode (Default)
//! A prompt loop that behaves like the search surface: every line is a query,
//! a number opens that result, and `:` commands change filters or recall
//! history.
//!
//! - **Command:** `alumnet` or `alumnet interactive`
//!
//! ## 2. One-shot Search
//! Run a single search and print the ranked results.
//!
//! - **Command:** `alumnet search "<query>"`
//! - **Example:** `alumnet search priya --type alumni --batch 2018`
//!
//! ## 3. Utility Commands
//! `alumnet history ...` and `alumnet config ...`. See `alumnet --help`.

mod args;
mod commands;
mod console;
mod router;

use alumnet_core::config::LoggingConfig;
use args::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = alumnet_core::load_config(cli.config.as_deref())?;

    init_logging(&config.logging, cli.verbose);

    router::route(cli, config).await
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the configured level applies to our
/// own crates and everything else stays at `warn`. Logs go to stderr so
/// `--json` output stays clean.
fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { logging.level.as_str() };
        EnvFilter::new(format!("warn,alumnet_core={level},alumnet={level}"))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format.eq_ignore_ascii_case("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}
