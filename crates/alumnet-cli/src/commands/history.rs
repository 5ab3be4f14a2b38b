//! Search history commands

use crate::commands::history_store;
use crate::console::CliConsole;
use alumnet_core::{AlumnetConfig, HistoryStore, LocalHistoryStore, SearchHistory};
use tracing::warn;

/// Stored history, normalised. An unreadable file reads as empty.
async fn load(config: &AlumnetConfig) -> anyhow::Result<(SearchHistory, LocalHistoryStore)> {
    let store = history_store(config)?;
    let entries = store.load().await.unwrap_or_else(|e| {
        warn!("Ignoring unreadable search history at {:?}: {}", store.path(), e);
        Vec::new()
    });
    Ok((
        SearchHistory::from_entries(entries, config.history.capacity),
        store,
    ))
}

/// Print remembered queries
pub async fn list(config: &AlumnetConfig) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let (history, _) = load(config).await?;

    console.print_header("Recent searches");
    console.print_history(history.entries());
    Ok(())
}

/// Forget every remembered query
pub async fn clear(config: &AlumnetConfig) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    history_store(config)?.clear().await?;
    console.success("Search history cleared");
    Ok(())
}

/// Forget one remembered query
pub async fn remove(config: &AlumnetConfig, query: &str) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let (mut history, store) = load(config).await?;

    if history.remove(query) {
        store.save(history.entries()).await?;
        console.success(&format!("Removed \"{}\"", query));
    } else {
        console.warn(&format!("\"{}\" is not in the search history", query));
    }
    Ok(())
}
