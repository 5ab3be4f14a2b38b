//! File-based configuration loading

use crate::config::model::AlumnetConfig;
use crate::error::{AlumnetError, AlumnetResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> AlumnetResult<AlumnetConfig> {
    if !path.exists() {
        return Ok(AlumnetConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        AlumnetError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    parse_config(&content, path)
}

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

fn parse_config(content: &str, path: &Path) -> AlumnetResult<AlumnetConfig> {
    let format = Format::of(path);
    let parsed = match format {
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| {
        AlumnetError::config_with_context(
            format!("Failed to parse {} config: {}", format.name(), e),
            format!("Reading '{}'", path.display()),
        )
    })
}

/// Write configuration to a file in the format its extension names
pub fn save_to_file(config: &AlumnetConfig, path: &Path) -> AlumnetResult<()> {
    let format = Format::of(path);
    let content = match format {
        Format::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        Format::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
    }
    .map_err(|e| AlumnetError::config(format!("Failed to serialize {}: {}", format.name(), e)))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
        .map_err(|e| AlumnetError::io_with_path(e.to_string(), path.display().to_string()))
}
