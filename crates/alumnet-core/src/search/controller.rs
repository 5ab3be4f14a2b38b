//! Search surface controller
//!
//! Drives the [`SearchState`] from user input: keystrokes are debounced,
//! Enter and filter changes search immediately, and every dispatched search
//! is tagged with a generation so a slow, superseded response can never
//! overwrite newer results or repopulate a closed surface.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::debounce::Debouncer;
use super::dispatcher::Dispatcher;
use super::navigation::navigation_target;
use super::state::{SearchAction, SearchState, SurfacePhase, Transition};
use crate::api::SearchBackend;
use crate::config::AlumnetConfig;
use crate::history::{HistoryStore, SearchHistory};
use crate::types::{DateRange, Key, KeyInput, SearchFilter, TypeFilter, non_blank};

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Opened,
    Closed,
    /// The surface closed and the caller should go to this route
    Navigate(String),
    SearchStarted,
    Ignored,
}

/// Handle to the search surface. Cheap to clone; clones share state.
///
/// Methods that schedule or start searches spawn tokio tasks and must be
/// called from within a runtime.
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<Inner>,
}

struct Inner {
    dispatcher: Dispatcher,
    store: Arc<dyn HistoryStore>,
    state: Mutex<SearchState>,
    debouncer: Mutex<Debouncer>,
    updates: watch::Sender<SearchState>,
    persist_lock: tokio::sync::Mutex<()>,
}

impl SearchController {
    /// Create a controller around an explicit initial state
    pub fn new(
        dispatcher: Dispatcher,
        store: Arc<dyn HistoryStore>,
        state: SearchState,
        debounce: Duration,
    ) -> Self {
        let (updates, _) = watch::channel(state.clone());
        Self {
            inner: Arc::new(Inner {
                dispatcher,
                store,
                state: Mutex::new(state),
                debouncer: Mutex::new(Debouncer::new(debounce)),
                updates,
                persist_lock: tokio::sync::Mutex::new(()),
            }),
        }
    }

    /// Create a controller from configuration
    pub fn from_config(
        config: &AlumnetConfig,
        backend: Arc<dyn SearchBackend>,
        store: Arc<dyn HistoryStore>,
    ) -> Self {
        let state = SearchState::new(
            config.search.min_query_len,
            config.search.history_min_len,
            SearchHistory::new(config.history.capacity),
        );
        let dispatcher = Dispatcher::new(backend, config.search.per_collection_limit);
        Self::new(dispatcher, store, state, config.search.debounce())
    }

    /// Load persisted history. Unreadable history is logged and ignored.
    pub async fn restore_history(&self) {
        match self.inner.store.load().await {
            Ok(entries) => {
                debug!("Restored {} history entries", entries.len());
                self.inner.apply(SearchAction::HistoryLoaded(entries));
            }
            Err(e) => warn!("Ignoring unreadable search history: {}", e),
        }
    }

    /// Current state
    pub fn snapshot(&self) -> SearchState {
        self.inner.state.lock().clone()
    }

    /// Receive a fresh snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.updates.subscribe()
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.state.lock().history.to_vec()
    }

    pub fn open(&self) -> bool {
        self.inner.apply(SearchAction::Open).changed()
    }

    /// Close the surface: explicit close control, Escape, or outside click
    ///
    /// Clears query and results and collapses the filter panel. History is
    /// left alone.
    pub fn close(&self) -> bool {
        self.inner.debouncer.lock().cancel();
        self.inner.apply(SearchAction::Close).changed()
    }

    /// A click landed outside the surface
    pub fn click_outside(&self) -> bool {
        self.close()
    }

    pub fn toggle_filters(&self) -> bool {
        self.inner.apply(SearchAction::ToggleFilters).changed()
    }

    /// The query text changed
    ///
    /// Cleared text clears results at once. Text long enough to search
    /// (re)starts the debounce timer. Shorter text does nothing further.
    pub fn on_query_change(&self, query: impl Into<String>) {
        self.inner.debouncer.lock().cancel();

        let (_, schedule) = self
            .inner
            .apply_then(SearchAction::QueryChanged(query.into()), |state| {
                state.phase == SurfacePhase::Debouncing
            });

        if schedule {
            let weak: Weak<Inner> = Arc::downgrade(&self.inner);
            self.inner.debouncer.lock().schedule(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.start_search();
                }
            });
        }
    }

    /// Search the current query right away, skipping the debounce
    ///
    /// Returns the task handle, or None if the surface is closed or the
    /// query is too short.
    pub fn search_now(&self) -> Option<JoinHandle<()>> {
        self.inner.debouncer.lock().cancel();
        self.inner.start_search()
    }

    /// Enter: open the top result if there is one, otherwise search now
    pub fn submit(&self) -> KeyOutcome {
        let top = {
            let state = self.inner.state.lock();
            if !state.is_open() {
                return KeyOutcome::Ignored;
            }
            state.results.first().cloned()
        };

        if let Some(result) = top {
            let target = navigation_target(&result);
            self.close();
            return KeyOutcome::Navigate(target);
        }

        match self.search_now() {
            Some(_) => KeyOutcome::SearchStarted,
            None => KeyOutcome::Ignored,
        }
    }

    pub fn handle_key(&self, input: KeyInput) -> KeyOutcome {
        if input.is_open_shortcut() {
            return if self.open() {
                KeyOutcome::Opened
            } else {
                KeyOutcome::Ignored
            };
        }

        match input.key {
            Key::Escape => {
                if self.close() {
                    KeyOutcome::Closed
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => self.submit(),
            Key::Char(_) => KeyOutcome::Ignored,
        }
    }

    /// Open the result at `index`; returns its route and closes the surface
    pub fn select(&self, index: usize) -> Option<String> {
        let result = self.inner.state.lock().results.get(index).cloned()?;
        let target = navigation_target(&result);
        self.close();
        Some(target)
    }

    /// Re-run a remembered query. Returns false if there is no such entry.
    pub fn select_history(&self, index: usize) -> bool {
        let entry = {
            let state = self.inner.state.lock();
            if !state.is_open() {
                return false;
            }
            state.history.get(index).map(str::to_string)
        };
        let Some(query) = entry else {
            return false;
        };

        self.inner.debouncer.lock().cancel();
        self.inner.apply(SearchAction::QueryChanged(query));
        self.inner.start_search();
        true
    }

    /// Replace the filter set; searches immediately when the query allows
    pub fn set_filter(&self, filter: SearchFilter) {
        let (transition, searchable) = self
            .inner
            .apply_then(SearchAction::FilterChanged(filter), |state| {
                state.is_open() && state.is_searchable()
            });

        if transition.changed() && searchable {
            self.search_now();
        }
    }

    pub fn set_type(&self, kind: TypeFilter) {
        self.update_filter(|filter| filter.kind = kind);
    }

    pub fn set_location(&self, location: impl Into<String>) {
        let location = non_blank(location.into());
        self.update_filter(|filter| filter.location = location);
    }

    pub fn set_batch(&self, batch: impl Into<String>) {
        let batch = non_blank(batch.into());
        self.update_filter(|filter| filter.batch = batch);
    }

    pub fn set_date_range(&self, date_range: DateRange) {
        self.update_filter(|filter| filter.date_range = date_range);
    }

    fn update_filter(&self, edit: impl FnOnce(&mut SearchFilter)) {
        let mut filter = self.inner.state.lock().filter.clone();
        edit(&mut filter);
        self.set_filter(filter);
    }

    pub async fn remove_history(&self, query: &str) -> bool {
        let transition = self
            .inner
            .apply(SearchAction::HistoryRemoved(query.to_string()));
        if transition == Transition::HistoryUpdated {
            self.inner.persist_history().await;
            true
        } else {
            false
        }
    }

    pub async fn clear_history(&self) {
        if self.inner.apply(SearchAction::HistoryCleared) == Transition::HistoryUpdated {
            self.inner.persist_history().await;
        }
    }
}

impl Inner {
    fn apply(&self, action: SearchAction) -> Transition {
        self.apply_then(action, |_| ()).0
    }

    /// Apply `action` and inspect the resulting state under the same lock
    fn apply_then<R>(
        &self,
        action: SearchAction,
        inspect: impl FnOnce(&SearchState) -> R,
    ) -> (Transition, R) {
        let (transition, inspected, snapshot) = {
            let mut state = self.state.lock();
            let transition = state.apply(action);
            let inspected = inspect(&state);
            let snapshot = transition.changed().then(|| state.clone());
            (transition, inspected, snapshot)
        };
        if let Some(snapshot) = snapshot {
            self.updates.send_replace(snapshot);
        }
        (transition, inspected)
    }

    fn start_search(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let (generation, query, filter, snapshot) = {
            let mut state = self.state.lock();
            if !state.is_open() || !state.is_searchable() {
                return None;
            }
            state.apply(SearchAction::SearchStarted);
            (
                state.generation,
                state.query.clone(),
                state.filter.clone(),
                state.clone(),
            )
        };
        self.updates.send_replace(snapshot);
        debug!(generation, query = query.as_str(), "Starting search");

        let inner = Arc::clone(self);
        Some(tokio::spawn(async move {
            let results = inner.dispatcher.search(&query, &filter).await;
            let transition = inner.apply(SearchAction::SearchFinished {
                generation,
                query,
                results,
            });

            match transition {
                Transition::Unchanged => debug!(generation, "Discarded superseded search results"),
                Transition::HistoryUpdated => inner.persist_history().await,
                Transition::Updated => {}
            }
        }))
    }

    async fn persist_history(&self) {
        let _guard = self.persist_lock.lock().await;
        let entries = self.state.lock().history.to_vec();
        if let Err(e) = self.store.save(&entries).await {
            warn!("Failed to persist search history: {}", e);
        }
    }
}
