//! Query dispatcher
//!
//! Fans one query out to every collection the filter admits, concurrently,
//! then merges the answers into a single ranked list.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::scorer::{rank, score};
use crate::api::{CollectionRequest, SearchBackend};
use crate::error::AlumnetResult;
use crate::types::{ResultKind, SearchFilter, SearchResult};

/// Fans queries out to the backend collections
#[derive(Clone)]
pub struct Dispatcher {
    backend: Arc<dyn SearchBackend>,
    limit: usize,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn SearchBackend>, limit: usize) -> Self {
        Self {
            backend,
            limit: limit.max(1),
        }
    }

    /// Collections queried for `filter`, in fetch order
    pub fn collections_for(filter: &SearchFilter) -> Vec<ResultKind> {
        ResultKind::FETCHED
            .into_iter()
            .filter(|kind| filter.kind.admits(*kind))
            .collect()
    }

    /// Build the lookup for one collection
    ///
    /// Alumni take both location and batch. Events and jobs take location
    /// only. Posts take neither.
    pub fn request_for(
        kind: ResultKind,
        query: &str,
        filter: &SearchFilter,
        limit: usize,
    ) -> CollectionRequest {
        let (location, batch) = match kind {
            ResultKind::Alumni => (filter.location.clone(), filter.batch.clone()),
            ResultKind::Event | ResultKind::Job => (filter.location.clone(), None),
            ResultKind::Post | ResultKind::Message => (None, None),
        };
        CollectionRequest {
            search: query.trim().to_string(),
            limit,
            location,
            batch,
        }
    }

    /// Run the fan-out and rank the merged results
    ///
    /// Collections that fail at the transport or status level contribute
    /// nothing. Any other failure is returned and the caller gets no results.
    pub async fn dispatch(
        &self,
        query: &str,
        filter: &SearchFilter,
    ) -> AlumnetResult<Vec<SearchResult>> {
        let kinds = Self::collections_for(filter);
        debug!(query, collections = kinds.len(), "Dispatching search");

        let lookups = kinds.iter().map(|kind| {
            let request = Self::request_for(*kind, query, filter, self.limit);
            let backend = Arc::clone(&self.backend);
            async move {
                let outcome = backend.fetch(*kind, &request).await;
                (*kind, outcome)
            }
        });

        let mut merged = Vec::new();
        for (kind, outcome) in join_all(lookups).await {
            match outcome {
                Ok(candidates) => {
                    debug!("{} returned {} candidates", kind, candidates.len());
                    merged.extend(candidates.into_iter().take(self.limit).map(|candidate| {
                        let mut result = candidate.result;
                        result.score = score(query, &candidate.text);
                        result
                    }));
                }
                Err(e) if e.is_degradable() => {
                    warn!("{} lookup failed, skipping collection: {}", kind, e);
                }
                Err(e) => return Err(e),
            }
        }

        rank(&mut merged);
        Ok(merged)
    }

    /// Like [`dispatch`](Self::dispatch), but any top-level failure is
    /// logged and reported as an empty result list
    pub async fn search(&self, query: &str, filter: &SearchFilter) -> Vec<SearchResult> {
        match self.dispatch(query, filter).await {
            Ok(results) => results,
            Err(e) => {
                error!(code = e.error_code(), "Search for '{}' failed: {}", query.trim(), e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Candidate, MockSearchBackend};
    use crate::error::AlumnetError;
    use crate::types::TypeFilter;

    fn candidate(kind: ResultKind, id: &str, text: &str) -> Candidate {
        Candidate {
            result: SearchResult {
                kind,
                id: id.to_string(),
                title: text.to_string(),
                description: String::new(),
                image: None,
                url: format!("/{}", kind),
                score: 0,
            },
            text: text.to_string(),
        }
    }

    fn dispatcher(mock: MockSearchBackend) -> Dispatcher {
        Dispatcher::new(Arc::new(mock), 5)
    }

    #[tokio::test]
    async fn test_alumni_filter_only_calls_alumni() {
        let mut mock = MockSearchBackend::new();
        mock.expect_fetch()
            .withf(|kind, request| *kind == ResultKind::Alumni && request.search == "priya")
            .times(1)
            .returning(|_, _| {
                Ok(vec![candidate(ResultKind::Alumni, "7", "Priya Patel")])
            });

        let filter = SearchFilter::new().with_kind(TypeFilter::Only(ResultKind::Alumni));
        let results = dispatcher(mock).dispatch("priya", &filter).await.unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].score >= 50);
    }

    #[tokio::test]
    async fn test_all_issues_four_lookups_capped_at_limit() {
        let mut mock = MockSearchBackend::new();
        mock.expect_fetch()
            .times(4)
            .returning(|kind, request| {
                assert_eq!(request.limit, 5);
                // A server that ignores the limit.
                Ok((0..8)
                    .map(|i| candidate(kind, &format!("{}-{}", kind, i), "alpha beta"))
                    .collect())
            });

        let results = dispatcher(mock)
            .dispatch("alpha", &SearchFilter::default())
            .await
            .unwrap();
        assert_eq!(results.len(), 20);
    }

    #[tokio::test]
    async fn test_failed_collection_degrades_silently() {
        let mut mock = MockSearchBackend::new();
        mock.expect_fetch().times(4).returning(|kind, _| match kind {
            ResultKind::Job => Err(AlumnetError::http_with_status("down", "/api/jobs", 503)),
            other => Ok(vec![candidate(other, "1", "reunion dinner")]),
        });

        let results = dispatcher(mock)
            .dispatch("reunion", &SearchFilter::default())
            .await
            .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.kind != ResultKind::Job));
    }

    #[tokio::test]
    async fn test_malformed_body_empties_everything() {
        let mut mock = MockSearchBackend::new();
        mock.expect_fetch().times(4).returning(|kind, _| match kind {
            ResultKind::Event => Err(AlumnetError::json("expected value")),
            other => Ok(vec![candidate(other, "1", "reunion")]),
        });

        let dispatcher = dispatcher(mock);
        let filter = SearchFilter::default();
        assert!(dispatcher.dispatch("reunion", &filter).await.is_err());
        assert!(dispatcher.search("reunion", &filter).await.is_empty());
    }

    #[tokio::test]
    async fn test_results_ranked_with_stable_ties() {
        let mut mock = MockSearchBackend::new();
        mock.expect_fetch().times(4).returning(|kind, _| {
            Ok(match kind {
                ResultKind::Post => vec![candidate(kind, "p", "a post about rust")],
                ResultKind::Alumni => vec![candidate(kind, "a", "Rust Cohle")],
                ResultKind::Event => vec![candidate(kind, "e", "rust")],
                _ => vec![candidate(kind, "j", "senior rust engineer")],
            })
        });

        let results = dispatcher(mock)
            .dispatch("rust", &SearchFilter::default())
            .await
            .unwrap();
        let order: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        // exact, prefix, then the two substring hits in fetch order
        assert_eq!(order, vec!["e", "a", "p", "j"]);
    }

    #[tokio::test]
    async fn test_message_filter_fetches_nothing() {
        let mock = MockSearchBackend::new();
        let filter = SearchFilter::new().with_kind(TypeFilter::Only(ResultKind::Message));
        let results = dispatcher(mock).dispatch("hello", &filter).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_filter_forwarding() {
        let filter = SearchFilter::new().with_location("Pune").with_batch("2018");

        let alumni = Dispatcher::request_for(ResultKind::Alumni, " priya ", &filter, 5);
        assert_eq!(alumni.search, "priya");
        assert_eq!(alumni.location.as_deref(), Some("Pune"));
        assert_eq!(alumni.batch.as_deref(), Some("2018"));

        let jobs = Dispatcher::request_for(ResultKind::Job, "priya", &filter, 5);
        assert_eq!(jobs.location.as_deref(), Some("Pune"));
        assert_eq!(jobs.batch, None);

        let posts = Dispatcher::request_for(ResultKind::Post, "priya", &filter, 5);
        assert_eq!(posts.location, None);
        assert_eq!(posts.batch, None);
    }
}
