//! Configuration management for Alumnet

pub mod env_loader;
pub mod file_loader;
pub mod loader;
pub mod model;

pub use file_loader::{load_from_file, save_to_file};
pub use loader::{DEFAULT_CONFIG_FILE, load_config};
pub use model::{AlumnetConfig, ApiConfig, HistoryConfig, LoggingConfig, SearchConfig};
