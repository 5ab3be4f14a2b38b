//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction, FilterArgs, HistoryAction};
use crate::commands;
use alumnet_core::AlumnetConfig;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: AlumnetConfig) -> anyhow::Result<()> {
    let verbose = cli.verbose;
    let config_path = cli.config;

    match cli.command {
        Some(Commands::Search {
            query,
            filter,
            json,
        }) => commands::search::execute(&config, &query.join(" "), &filter, json, verbose).await,
        Some(Commands::Interactive { filter }) => {
            commands::interactive::execute(&config, &filter, verbose).await
        }
        None => commands::interactive::execute(&config, &FilterArgs::default(), verbose).await,
        Some(Commands::History { action }) => match action {
            HistoryAction::List => commands::history::list(&config).await,
            HistoryAction::Clear => commands::history::clear(&config).await,
            HistoryAction::Remove { query } => commands::history::remove(&config, &query).await,
        },
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config, config_path.as_deref()),
            ConfigAction::Init { path, force } => commands::config::init(&path, force),
        },
    }
}
