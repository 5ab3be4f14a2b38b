//! Environment variable-based configuration overrides

use crate::config::model::AlumnetConfig;
use crate::error::{AlumnetError, AlumnetResult};
use std::env;
use std::path::PathBuf;

pub const ENV_API_URL: &str = "ALUMNET_API_URL";
pub const ENV_API_TOKEN: &str = "ALUMNET_API_TOKEN";
pub const ENV_DEBOUNCE_MS: &str = "ALUMNET_DEBOUNCE_MS";
pub const ENV_HISTORY_PATH: &str = "ALUMNET_HISTORY_PATH";
pub const ENV_LOG_LEVEL: &str = "ALUMNET_LOG_LEVEL";

/// Apply `ALUMNET_*` environment variables on top of `config`
pub fn apply_env_overrides(config: &mut AlumnetConfig) -> AlumnetResult<()> {
    apply_overrides_with(config, |key| env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn apply_overrides_with<F>(config: &mut AlumnetConfig, lookup: F) -> AlumnetResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL) {
        config.api.base_url = url;
    }

    if let Some(token) = lookup(ENV_API_TOKEN) {
        config.api.auth_token = Some(token);
    }

    if let Some(debounce) = lookup(ENV_DEBOUNCE_MS) {
        config.search.debounce_ms = debounce.trim().parse().map_err(|_| {
            AlumnetError::config(format!("Invalid {} value: '{}'", ENV_DEBOUNCE_MS, debounce))
        })?;
    }

    if let Some(path) = lookup(ENV_HISTORY_PATH) {
        config.history.path = Some(PathBuf::from(path));
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    Ok(())
}
