//! Search surface state and its transitions
//!
//! All mutation goes through [`SearchState::apply`], so every behavior of the
//! surface can be tested without timers or a network.

use crate::history::SearchHistory;
use crate::types::{SearchFilter, SearchResult, TypeFilter};

/// Where the search surface is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePhase {
    Closed,
    /// Open with nothing searched yet
    Idle,
    /// A search is scheduled and waiting for typing to pause
    Debouncing,
    /// A search is in flight
    Searching,
    /// The last committed search found something
    Results,
    /// The last committed search found nothing
    Empty,
}

impl SurfacePhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Every way the state can change
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Open,
    Close,
    QueryChanged(String),
    FilterChanged(SearchFilter),
    ToggleFilters,
    /// A search is about to be dispatched; the generation advances
    SearchStarted,
    SearchFinished {
        generation: u64,
        query: String,
        results: Vec<SearchResult>,
    },
    HistoryLoaded(Vec<String>),
    HistoryRemoved(String),
    HistoryCleared,
}

/// What an action did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Updated,
    /// Updated, and the history needs persisting
    HistoryUpdated,
}

impl Transition {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// State of the global search surface
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub phase: SurfacePhase,
    pub query: String,
    pub filter: SearchFilter,
    pub results: Vec<SearchResult>,
    pub history: SearchHistory,
    pub filters_open: bool,
    /// Advances on every dispatch, on close and on clearing the query.
    /// Only a response carrying the current value may commit.
    pub generation: u64,
    /// Query the committed results belong to
    pub results_query: Option<String>,
    min_query_len: usize,
    history_min_len: usize,
}

impl SearchState {
    pub fn new(min_query_len: usize, history_min_len: usize, history: SearchHistory) -> Self {
        Self {
            phase: SurfacePhase::Closed,
            query: String::new(),
            filter: SearchFilter::default(),
            results: Vec::new(),
            history,
            filters_open: false,
            generation: 0,
            results_query: None,
            min_query_len: min_query_len.max(1),
            history_min_len,
        }
    }

    /// Trimmed query length in characters
    pub fn query_len(&self) -> usize {
        self.query.trim().chars().count()
    }

    /// Whether the current query is long enough to search
    pub fn is_searchable(&self) -> bool {
        self.query_len() >= self.min_query_len
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn apply(&mut self, action: SearchAction) -> Transition {
        match action {
            SearchAction::Open => {
                if self.is_open() {
                    return Transition::Unchanged;
                }
                self.phase = SurfacePhase::Idle;
                Transition::Updated
            }
            SearchAction::Close => {
                if !self.is_open() {
                    return Transition::Unchanged;
                }
                self.phase = SurfacePhase::Closed;
                self.query.clear();
                self.results.clear();
                self.results_query = None;
                self.filters_open = false;
                self.generation += 1;
                Transition::Updated
            }
            SearchAction::QueryChanged(query) => {
                if !self.is_open() {
                    return Transition::Unchanged;
                }
                self.query = query;
                if self.query.trim().is_empty() {
                    self.results.clear();
                    self.results_query = None;
                    self.generation += 1;
                    self.phase = SurfacePhase::Idle;
                } else if self.is_searchable() {
                    self.phase = SurfacePhase::Debouncing;
                } else if self.phase == SurfacePhase::Debouncing {
                    // The pending timer is gone; fall back to what is on screen.
                    self.phase = self.settled_phase();
                }
                Transition::Updated
            }
            SearchAction::FilterChanged(filter) => {
                if filter == self.filter {
                    return Transition::Unchanged;
                }
                if filter.kind != self.filter.kind {
                    if let TypeFilter::Only(_) = filter.kind {
                        self.results.retain(|r| filter.kind.admits(r.kind));
                        if matches!(self.phase, SurfacePhase::Results | SurfacePhase::Empty) {
                            self.phase = self.settled_phase();
                        }
                    }
                }
                self.filter = filter;
                Transition::Updated
            }
            SearchAction::ToggleFilters => {
                if !self.is_open() {
                    return Transition::Unchanged;
                }
                self.filters_open = !self.filters_open;
                Transition::Updated
            }
            SearchAction::SearchStarted => {
                self.generation += 1;
                self.phase = SurfacePhase::Searching;
                Transition::Updated
            }
            SearchAction::SearchFinished {
                generation,
                query,
                results,
            } => {
                if generation != self.generation || !self.is_open() {
                    return Transition::Unchanged;
                }
                let trimmed = query.trim().to_string();
                let remember =
                    !results.is_empty() && trimmed.chars().count() >= self.history_min_len;

                self.results = results;
                self.results_query = Some(trimmed.clone());
                // A newer query's timer is still pending.
                if self.phase != SurfacePhase::Debouncing {
                    self.phase = self.settled_phase();
                }

                if remember {
                    self.history.record(trimmed);
                    Transition::HistoryUpdated
                } else {
                    Transition::Updated
                }
            }
            SearchAction::HistoryLoaded(entries) => {
                self.history = SearchHistory::from_entries(entries, self.history.capacity());
                Transition::Updated
            }
            SearchAction::HistoryRemoved(query) => {
                if self.history.remove(&query) {
                    Transition::HistoryUpdated
                } else {
                    Transition::Unchanged
                }
            }
            SearchAction::HistoryCleared => {
                if self.history.is_empty() {
                    return Transition::Unchanged;
                }
                self.history.clear();
                Transition::HistoryUpdated
            }
        }
    }

    fn settled_phase(&self) -> SurfacePhase {
        if !self.results.is_empty() {
            SurfacePhase::Results
        } else if self.results_query.is_some() {
            SurfacePhase::Empty
        } else {
            SurfacePhase::Idle
        }
    }
}
