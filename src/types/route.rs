//! Route decisions

use serde::{Deserialize, Serialize};

/// The responder category chosen for one user query.
///
/// Computed fresh per query; a pure function of the query text and the
/// has-document-context flag, no hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteDecision {
    /// News / external-alert lookup
    Search,
    /// Question answered against the loaded contract
    Document,
    /// General assistant, no grounding
    General,
}

impl RouteDecision {
    /// Dispatch label used for `handled_by` tagging on assistant turns
    pub fn label(&self) -> &'static str {
        match self {
            RouteDecision::Search => "search",
            RouteDecision::Document => "document",
            RouteDecision::General => "general",
        }
    }
}

impl std::fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RouteDecision::Search => "SEARCH",
            RouteDecision::Document => "DOCUMENT",
            RouteDecision::General => "GENERAL",
        };
        write!(f, "{name}")
    }
}
