//! End-to-end behavior of the search surface: debouncing, request races,
//! filter changes and history persistence.

use alumnet_core::api::{Candidate, CollectionRequest, SearchBackend};
use alumnet_core::error::AlumnetResult;
use alumnet_core::history::{HistoryStore, LocalHistoryStore, MemoryHistoryStore};
use alumnet_core::{
    AlumnetConfig, KeyOutcome, ResultKind, SearchController, SearchResult, SurfacePhase,
    TypeFilter,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Call {
    kind: ResultKind,
    search: String,
    at: Instant,
}

/// Answers every lookup with one hit titled after the query, optionally slowly
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    delays: HashMap<String, Duration>,
}

impl FakeBackend {
    fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn fetch(
        &self,
        kind: ResultKind,
        request: &CollectionRequest,
    ) -> AlumnetResult<Vec<Candidate>> {
        self.calls.lock().push(Call {
            kind,
            search: request.search.clone(),
            at: Instant::now(),
        });
        if let Some(delay) = self.delays.get(&request.search) {
            tokio::time::sleep(*delay).await;
        }
        Ok(vec![Candidate {
            result: SearchResult {
                kind,
                id: format!("{}-{}", kind, request.search),
                title: request.search.clone(),
                description: String::new(),
                image: None,
                url: "/feed".to_string(),
                score: 0,
            },
            text: request.search.clone(),
        }])
    }
}

fn setup(backend: FakeBackend) -> (SearchController, Arc<FakeBackend>, Arc<MemoryHistoryStore>) {
    let backend = Arc::new(backend);
    let store = Arc::new(MemoryHistoryStore::new());
    let controller =
        SearchController::from_config(&AlumnetConfig::default(), backend.clone(), store.clone());
    controller.open();
    (controller, backend, store)
}

#[tokio::test(start_paused = true)]
async fn test_rapid_keystrokes_fetch_once() {
    let (controller, backend, _) = setup(FakeBackend::default());
    let mut updates = controller.subscribe();
    let start = Instant::now();

    controller.on_query_change("a");
    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.on_query_change("ab");

    updates
        .wait_for(|state| state.phase == SurfacePhase::Results)
        .await
        .unwrap();

    let calls = backend.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|c| c.search == "ab"));
    // 300ms after the second keystroke, not the first.
    assert!(calls[0].at - start >= Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn test_short_query_issues_no_request() {
    let (controller, backend, _) = setup(FakeBackend::default());

    controller.on_query_change("a");
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(backend.calls().is_empty());
    assert_eq!(controller.snapshot().phase, SurfacePhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_short_query_keeps_previous_results() {
    let (controller, backend, _) = setup(FakeBackend::default());

    controller.on_query_change("ab");
    controller.search_now().unwrap().await.unwrap();
    let before = controller.snapshot().results;
    assert_eq!(before.len(), 4);

    controller.on_query_change("a");
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(backend.calls().len(), 4);
    assert_eq!(controller.snapshot().results, before);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_query_clears_results_immediately() {
    let (controller, _, _) = setup(FakeBackend::default());

    controller.on_query_change("ab");
    controller.search_now().unwrap().await.unwrap();
    controller.on_query_change("");

    let state = controller.snapshot();
    assert!(state.results.is_empty());
    assert_eq!(state.phase, SurfacePhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_slow_stale_response_does_not_overwrite_newer_results() {
    let backend = FakeBackend::default()
        .with_delay("ab", Duration::from_millis(500))
        .with_delay("abc", Duration::from_millis(10));
    let (controller, _, _) = setup(backend);

    controller.on_query_change("ab");
    let slow = controller.search_now().unwrap();
    controller.on_query_change("abc");
    let fast = controller.search_now().unwrap();

    fast.await.unwrap();
    slow.await.unwrap();

    let state = controller.snapshot();
    assert_eq!(state.results_query.as_deref(), Some("abc"));
    assert!(state.results.iter().all(|r| r.title == "abc"));
    assert_eq!(state.history.entries(), &["abc"]);
}

#[tokio::test(start_paused = true)]
async fn test_older_response_keeps_newer_query_debouncing() {
    let backend = FakeBackend::default().with_delay("ab", Duration::from_millis(200));
    let (controller, _, _) = setup(backend);
    let mut updates = controller.subscribe();

    controller.on_query_change("ab");
    let older = controller.search_now().unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    controller.on_query_change("abcd");
    older.await.unwrap();

    let state = controller.snapshot();
    assert_eq!(state.phase, SurfacePhase::Debouncing);
    assert_eq!(state.query, "abcd");

    let settled = updates
        .wait_for(|state| state.results_query.as_deref() == Some("abcd"))
        .await
        .unwrap()
        .clone();
    assert_eq!(settled.phase, SurfacePhase::Results);
    assert!(settled.results.iter().all(|r| r.title == "abcd"));
}

#[tokio::test(start_paused = true)]
async fn test_enter_without_results_searches_once() {
    let (controller, backend, _) = setup(FakeBackend::default());

    controller.on_query_change("reunion");
    assert_eq!(controller.submit(), KeyOutcome::SearchStarted);
    tokio::time::sleep(Duration::from_secs(1)).await;

    let calls = backend.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|c| c.search == "reunion"));
    assert_eq!(controller.snapshot().phase, SurfacePhase::Results);
}

#[tokio::test(start_paused = true)]
async fn test_close_while_in_flight_stays_closed() {
    let backend = FakeBackend::default().with_delay("reunion", Duration::from_millis(200));
    let (controller, backend, store) = setup(backend);

    controller.on_query_change("reunion");
    let in_flight = controller.search_now().unwrap();
    controller.close();

    let state = controller.snapshot();
    assert!(state.query.is_empty());
    assert!(state.results.is_empty());

    in_flight.await.unwrap();

    let state = controller.snapshot();
    assert_eq!(state.phase, SurfacePhase::Closed);
    assert!(state.results.is_empty());
    assert!(store.snapshot().is_empty());
    assert_eq!(backend.calls().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_close_cancels_pending_debounce() {
    let (controller, backend, _) = setup(FakeBackend::default());

    controller.on_query_change("reunion");
    controller.close();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(backend.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_type_filter_researches_without_debounce() {
    let (controller, backend, _) = setup(FakeBackend::default());
    let mut updates = controller.subscribe();

    controller.on_query_change("priya");
    controller.search_now().unwrap().await.unwrap();
    let generation = controller.snapshot().generation;
    let before = Instant::now();

    controller.set_type(TypeFilter::Only(ResultKind::Alumni));

    // Stale cross-type results are gone before the new response lands.
    let state = controller.snapshot();
    assert!(state.results.iter().all(|r| r.kind == ResultKind::Alumni));

    updates
        .wait_for(|state| state.generation == generation + 1 && state.phase == SurfacePhase::Results)
        .await
        .unwrap();

    assert!(Instant::now() - before < Duration::from_millis(300));
    let second_round: Vec<Call> = backend.calls().into_iter().skip(4).collect();
    assert_eq!(second_round.len(), 1);
    assert_eq!(second_round[0].kind, ResultKind::Alumni);
}

#[tokio::test(start_paused = true)]
async fn test_filter_change_with_short_query_does_not_search() {
    let (controller, backend, _) = setup(FakeBackend::default());

    controller.on_query_change("p");
    controller.set_location("Pune");
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(backend.calls().is_empty());
    assert_eq!(controller.snapshot().filter.location.as_deref(), Some("Pune"));
}

#[tokio::test(start_paused = true)]
async fn test_selecting_history_searches_immediately() {
    let (controller, backend, store) = setup(FakeBackend::default());
    store
        .save(&["machine learning".to_string()])
        .await
        .unwrap();
    controller.restore_history().await;
    let mut updates = controller.subscribe();

    assert!(controller.select_history(0));
    assert!(!controller.select_history(5));

    updates
        .wait_for(|state| state.phase == SurfacePhase::Results)
        .await
        .unwrap();
    assert_eq!(controller.snapshot().query, "machine learning");
    assert!(backend.calls().iter().all(|c| c.search == "machine learning"));
}

#[tokio::test]
async fn test_history_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("alumni_search_history.json");
    let backend: Arc<dyn SearchBackend> = Arc::new(FakeBackend::default());

    let first = SearchController::from_config(
        &AlumnetConfig::default(),
        backend.clone(),
        Arc::new(LocalHistoryStore::with_path(path.clone())),
    );
    first.open();
    for query in ["data science", "priya", "data science"] {
        first.on_query_change(query);
        first.search_now().unwrap().await.unwrap();
    }

    let second = SearchController::from_config(
        &AlumnetConfig::default(),
        backend,
        Arc::new(LocalHistoryStore::with_path(path)),
    );
    second.restore_history().await;
    assert_eq!(
        second.history(),
        vec!["data science".to_string(), "priya".to_string()]
    );
}

#[tokio::test]
async fn test_corrupt_history_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();

    let controller = SearchController::from_config(
        &AlumnetConfig::default(),
        Arc::new(FakeBackend::default()),
        Arc::new(LocalHistoryStore::with_path(path)),
    );
    controller.restore_history().await;
    assert!(controller.history().is_empty());
}
