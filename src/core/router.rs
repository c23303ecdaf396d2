//! Intent router: picks the responder category for a query
//!
//! Fixed-priority decision list, first match wins:
//! 1. query mentions news/search/alert → SEARCH
//! 2. a document is loaded            → DOCUMENT
//! 3. otherwise                       → GENERAL

use crate::types::RouteDecision;

/// Keywords that pull a query toward the search responder
const SEARCH_KEYWORDS: [&str; 3] = ["news", "search", "alert"];

/// Stateless query classifier
#[derive(Debug, Default)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    /// Route a query given whether document context is loaded.
    ///
    /// Pure function of its two arguments: case-insensitive, no memory of
    /// earlier calls or conversation history.
    pub fn route(&self, query: &str, has_document_context: bool) -> RouteDecision {
        let query = query.to_lowercase();

        if SEARCH_KEYWORDS.iter().any(|kw| query.contains(kw)) {
            RouteDecision::Search
        } else if has_document_context {
            RouteDecision::Document
        } else {
            RouteDecision::General
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
