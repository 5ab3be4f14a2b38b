//! Where selecting a result takes the user

use crate::types::{ResultKind, SearchResult};

/// Route for a selected result
///
/// Alumni open their profile. Everything else opens its collection page,
/// not the individual item.
pub fn navigation_target(result: &SearchResult) -> String {
    match result.kind {
        ResultKind::Alumni => format!("/profile/{}", result.id),
        _ => result.url.clone(),
    }
}
