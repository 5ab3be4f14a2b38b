//! CLI commands

pub mod config;
pub mod history;
pub mod interactive;
pub mod search;

use crate::args::FilterArgs;
use alumnet_core::{
    AlumnetConfig, HttpBackend, LocalHistoryStore, SearchController, SearchFilter,
};
use std::sync::Arc;

/// History store at the configured path, or the default location
pub fn history_store(config: &AlumnetConfig) -> anyhow::Result<LocalHistoryStore> {
    match &config.history.path {
        Some(path) => Ok(LocalHistoryStore::with_path(path.clone())),
        None => Ok(LocalHistoryStore::new()?),
    }
}

/// Controller wired to the HTTP backend and local history, already open
pub async fn open_controller(config: &AlumnetConfig) -> anyhow::Result<SearchController> {
    let backend = HttpBackend::new(&config.api)?;
    let store = history_store(config)?;
    let controller = SearchController::from_config(config, Arc::new(backend), Arc::new(store));
    controller.restore_history().await;
    controller.open();
    Ok(controller)
}

impl FilterArgs {
    pub fn to_filter(&self) -> SearchFilter {
        let mut filter = SearchFilter::new()
            .with_kind(self.kind)
            .with_date_range(self.date_range);
        if let Some(location) = &self.location {
            filter = filter.with_location(location.as_str());
        }
        if let Some(batch) = &self.batch {
            filter = filter.with_batch(batch.as_str());
        }
        filter
    }
}
