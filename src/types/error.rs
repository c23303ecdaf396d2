//! Responder failure signal
//!
//! The pure components (extractor, scanner, summarizer, router) never fail
//! for valid input; "nothing found" is an empty collection. The responder
//! capabilities are the only fallible boundary, and the orchestrator owns
//! the sole recovery path.

use thiserror::Error;

/// Failure signal from a dispatched responder capability.
///
/// No detailed schema is required of responder backends; the orchestrator
/// only needs to know the call produced no usable answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponderError {
    /// Backend unreachable or errored
    #[error("responder unavailable: {0}")]
    Unavailable(String),
    /// Backend answered but returned nothing usable
    #[error("responder returned no data")]
    Empty,
}
