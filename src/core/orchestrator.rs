//! Orchestrator: routes a query to a responder and keeps the conversation alive
//!
//! Owns the single recovery path for responder failures. A call to `handle`
//! always appends exactly one user turn and one assistant turn to the
//! caller's history, even when the dispatched responder fails.
//!
//! Concurrent `handle` calls against the same history must be serialized by
//! the caller (one conversation, one logical task); the components themselves
//! hold no shared mutable state.

use tracing::{debug, warn};

use crate::core::{HeuristicSummarizer, IntentRouter};
use crate::types::{ConversationTurn, Document, ResponderError, RouteDecision};
use crate::DOCUMENT_CONTEXT_CAP;

/// Label for synthesized fallback turns
pub const FALLBACK_LABEL: &str = "fallback";

/// Perspective used for the substitute report on the fallback path
const FALLBACK_AUDIENCE: &str = "buyer";

/// The three responder capabilities, one per route decision.
///
/// Each backend (hosted model, news API, ...) lives outside this core; a
/// failed or empty call surfaces as `ResponderError` and is recovered here.
/// Timeouts and retries are the capability implementor's concern: the
/// orchestrator treats every call as one synchronous unit.
pub trait Responders {
    fn search(&self, query: &str) -> Result<String, ResponderError>;
    fn document_qa(&self, query: &str, context: &str) -> Result<String, ResponderError>;
    fn general(&self, query: &str) -> Result<String, ResponderError>;
}

/// Ties router, responders, and fallback summarizer together
#[derive(Debug)]
pub struct Orchestrator<R: Responders> {
    responders: R,
    router: IntentRouter,
    summarizer: HeuristicSummarizer,
}

impl<R: Responders> Orchestrator<R> {
    pub fn new(responders: R) -> Self {
        Self {
            responders,
            router: IntentRouter::new(),
            summarizer: HeuristicSummarizer::new(),
        }
    }

    /// Handle one user query against an optional loaded document.
    ///
    /// Appends the user turn, dispatches per the route decision, appends
    /// and returns the assistant turn. Never fails: a responder error is
    /// converted into a fallback turn instead of propagating.
    pub fn handle(
        &self,
        query: &str,
        document: Option<&Document>,
        history: &mut Vec<ConversationTurn>,
    ) -> ConversationTurn {
        history.push(ConversationTurn::user(query));

        let decision = self.router.route(query, document.is_some());
        debug!(%decision, has_document = document.is_some(), "routing query");

        let turn = match self.dispatch(decision, query, document) {
            Ok(answer) => ConversationTurn::assistant(answer, decision.label()),
            Err(err) => {
                warn!(%decision, error = %err, "responder failed, falling back");
                ConversationTurn::assistant(self.fallback_content(decision, document), FALLBACK_LABEL)
            }
        };

        history.push(turn.clone());
        turn
    }

    fn dispatch(
        &self,
        decision: RouteDecision,
        query: &str,
        document: Option<&Document>,
    ) -> Result<String, ResponderError> {
        match decision {
            RouteDecision::Search => self.responders.search(query),
            RouteDecision::Document => {
                let context = document
                    .map(|d| truncate_context(&d.raw_text, DOCUMENT_CONTEXT_CAP))
                    .unwrap_or("");
                self.responders.document_qa(query, context)
            }
            RouteDecision::General => self.responders.general(query),
        }
    }

    /// Readable substitute answer: an apology line, plus the heuristic
    /// report when a document is loaded.
    fn fallback_content(&self, decision: RouteDecision, document: Option<&Document>) -> String {
        let mut content = format!(
            "The {} responder is currently unavailable.",
            decision.label()
        );
        if let Some(doc) = document {
            content.push_str("\nHere is the automatic contract review instead:\n\n");
            content.push_str(
                &self
                    .summarizer
                    .summarize(&doc.raw_text, FALLBACK_AUDIENCE)
                    .render(),
            );
        }
        content
    }
}

/// Prefix of at most `cap` characters, cut on a char boundary
fn truncate_context(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// =============================================================================
// TESTS
// =============================================================================
