//! Alumnet Core Library
//!
//! Global search for the alumni network: one query fans out to the posts,
//! alumni, events and jobs collections, and the answers come back as a single
//! ranked list. The crate also owns the search surface state machine, keystroke
//! debouncing, persisted search history and configuration.

pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use api::{CollectionRequest, HttpBackend, SearchBackend};
pub use config::{AlumnetConfig, load_config};
pub use error::{AlumnetError, AlumnetResult};
pub use history::{HistoryStore, LocalHistoryStore, MemoryHistoryStore, SearchHistory};
pub use search::{
    Dispatcher, KeyOutcome, SearchAction, SearchController, SearchState, SurfacePhase,
    navigation_target, score,
};
pub use types::{DateRange, Key, KeyInput, ResultKind, SearchFilter, SearchResult, TypeFilter};
