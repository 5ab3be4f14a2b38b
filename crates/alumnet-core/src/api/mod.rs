//! Backend access for the searchable collections
//!
//! [`SearchBackend`] is the seam between the dispatcher and the network.
//! [`HttpBackend`] talks to the real `/api/...` endpoints.

mod client;
pub mod records;

pub use client::HttpBackend;
pub use records::Candidate;

use async_trait::async_trait;

use crate::error::AlumnetResult;
use crate::types::ResultKind;

/// Parameters for a single collection lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRequest {
    /// Free text the server matches against
    pub search: String,
    /// Top-N bound
    pub limit: usize,
    /// Location constraint, when the collection accepts one
    pub location: Option<String>,
    /// Graduation batch constraint, when the collection accepts one
    pub batch: Option<String>,
}

/// Read-only access to one searchable collection at a time
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch candidates from the collection backing `kind`
    async fn fetch(
        &self,
        kind: ResultKind,
        request: &CollectionRequest,
    ) -> AlumnetResult<Vec<Candidate>>;
}
