//! HTTP implementation of the search backend

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::records::{Candidate, parse_collection};
use super::{CollectionRequest, SearchBackend};
use crate::config::ApiConfig;
use crate::error::{AlumnetError, AlumnetResult};
use crate::types::ResultKind;

/// Endpoint path for each collection
fn endpoint_path(kind: ResultKind) -> Option<&'static str> {
    match kind {
        ResultKind::Post => Some("/api/posts"),
        ResultKind::Alumni => Some("/api/alumni/search"),
        ResultKind::Event => Some("/api/events"),
        ResultKind::Job => Some("/api/jobs"),
        ResultKind::Message => None,
    }
}

/// Talks to the alumni network REST API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpBackend {
    /// Build a backend from API settings
    pub fn new(config: &ApiConfig) -> AlumnetResult<Self> {
        let mut builder = Client::builder().user_agent(concat!("alumnet/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AlumnetError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Build a backend around an existing client
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        }
    }

    fn query_pairs(kind: ResultKind, request: &CollectionRequest) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        // Posts take limit first; the other endpoints lead with search.
        if kind == ResultKind::Post {
            pairs.push(("limit", request.limit.to_string()));
            pairs.push(("search", request.search.clone()));
        } else {
            pairs.push(("search", request.search.clone()));
            pairs.push(("limit", request.limit.to_string()));
        }
        if let Some(batch) = &request.batch {
            pairs.push(("batch", batch.clone()));
        }
        if let Some(location) = &request.location {
            pairs.push(("location", location.clone()));
        }
        pairs
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn fetch(
        &self,
        kind: ResultKind,
        request: &CollectionRequest,
    ) -> AlumnetResult<Vec<Candidate>> {
        let Some(path) = endpoint_path(kind) else {
            debug!("No endpoint serves {} results", kind);
            return Ok(Vec::new());
        };
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .client
            .get(&url)
            .query(&Self::query_pairs(kind, request));
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        debug!("Fetching {} results from {}", kind, url);
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlumnetError::http_with_status(
                format!("{} lookup returned {}", kind, status),
                url,
                status.as_u16(),
            ));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| AlumnetError::json(e.to_string()).with_context(format!("decoding {}", url)))?;

        Ok(parse_collection(kind, &value))
    }
}
