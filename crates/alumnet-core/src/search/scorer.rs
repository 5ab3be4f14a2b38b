//! Relevance scoring
//!
//! Scores are only used to order one result list; they carry no meaning on
//! their own and are never stored.

use crate::types::SearchResult;

pub const EXACT_MATCH: u32 = 100;
pub const PREFIX_MATCH: u32 = 50;
pub const SUBSTRING_MATCH: u32 = 25;
pub const TOKEN_MATCH: u32 = 10;

/// Score `text` against `query`, case-insensitively
///
/// One tier applies: exact match, else prefix, else substring. On top of
/// that, every whitespace-separated query token found anywhere in the text
/// adds [`TOKEN_MATCH`]. An empty query scores zero.
///
/// The tiers are exclusive, not cumulative: an exact match scores
/// [`EXACT_MATCH`] rather than the sum of all three tiers.
pub fn score(query: &str, text: &str) -> u32 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return 0;
    }
    let text = text.to_lowercase();

    let tier = if text == query {
        EXACT_MATCH
    } else if text.starts_with(&query) {
        PREFIX_MATCH
    } else if text.contains(&query) {
        SUBSTRING_MATCH
    } else {
        0
    };

    let tokens = query
        .split_whitespace()
        .filter(|token| text.contains(token))
        .count() as u32;

    tier + tokens * TOKEN_MATCH
}

/// Sort by descending score, keeping fetch order among equal scores
pub fn rank(results: &mut [SearchResult]) {
    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
}
