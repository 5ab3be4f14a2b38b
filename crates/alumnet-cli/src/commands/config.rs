//! Configuration management commands

use crate::commands::history_store;
use crate::console::CliConsole;
use alumnet_core::AlumnetConfig;
use alumnet_core::config::{DEFAULT_CONFIG_FILE, save_to_file};
use anyhow::bail;
use colored::*;
use std::path::Path;

/// Show the effective configuration (file plus environment overrides)
pub fn show(config: &AlumnetConfig, config_file: Option<&Path>) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let path = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    console.print_header("Configuration");
    if path.exists() {
        console.success(&format!("Loaded configuration from: {}", path.display()));
    } else {
        console.warn(&format!("Configuration file not found: {}", path.display()));
        console.info("Using defaults and environment overrides");
    }
    console.print_separator();

    print_config(config);
    Ok(())
}

/// Write a configuration file holding the defaults
pub fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Initialization");

    if path.exists() && !force {
        console.error(&format!("Configuration file already exists: {}", path.display()));
        console.info("Use --force to overwrite");
        bail!("Configuration file already exists");
    }

    save_to_file(&AlumnetConfig::default(), path)?;

    console.success(&format!("Created configuration file: {}", path.display()));
    console.info("Edit api.base_url and api.auth_token to point at your alumni network");
    Ok(())
}

fn print_config(config: &AlumnetConfig) {
    let history_path = match &config.history.path {
        Some(path) => path.display().to_string(),
        None => history_store(config)
            .map(|store| store.path().display().to_string())
            .unwrap_or_else(|_| "(unavailable)".to_string()),
    };
    let timeout = config
        .api
        .request_timeout_secs
        .map(|secs| format!("{}s", secs))
        .unwrap_or_else(|| "none".to_string());

    let rows = [
        ("api.base_url", config.api.base_url.clone()),
        ("api.auth_token", mask_token(config.api.auth_token.as_deref())),
        ("api.request_timeout", timeout),
        ("search.debounce_ms", config.search.debounce_ms.to_string()),
        (
            "search.per_collection_limit",
            config.search.per_collection_limit.to_string(),
        ),
        ("search.min_query_len", config.search.min_query_len.to_string()),
        ("search.history_min_len", config.search.history_min_len.to_string()),
        ("history.capacity", config.history.capacity.to_string()),
        ("history.path", history_path),
        ("logging.level", config.logging.level.clone()),
        ("logging.format", config.logging.format.clone()),
    ];

    for (key, value) in rows {
        println!("  {:<28} {}", key.cyan(), value);
    }
}

/// Show only enough of a token to recognise it
fn mask_token(token: Option<&str>) -> String {
    match token {
        None => "not set".to_string(),
        Some(token) if token.chars().count() <= 8 => "****".to_string(),
        Some(token) => {
            let tail: String = token
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("****{}", tail)
        }
    }
}
