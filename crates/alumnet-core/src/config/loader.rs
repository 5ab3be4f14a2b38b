//! Layered configuration loading: defaults, then file, then environment

use crate::config::env_loader::apply_env_overrides;
use crate::config::file_loader::load_from_file;
use crate::config::model::AlumnetConfig;
use crate::error::AlumnetResult;
use std::path::Path;
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "alumnet.toml";

/// Load the effective configuration
///
/// A missing file yields defaults. Environment variables override whatever the
/// file set. The result is validated before it is returned.
pub fn load_config(config_file: Option<&Path>) -> AlumnetResult<AlumnetConfig> {
    let path = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    debug!("Loading configuration from {}", path.display());

    let mut config = AlumnetConfig::default();
    config.merge(load_from_file(path)?);
    apply_env_overrides(&mut config)?;
    config.validate()?;

    Ok(config)
}
