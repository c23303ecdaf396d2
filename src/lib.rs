//! ProcureWatch core: contract clause extraction, risk pattern scanning,
//! intent routing, and conversation orchestration.
//!
//! Pipeline: raw text → ClauseExtractor / RiskScanner → HeuristicSummarizer;
//! query + context flag → IntentRouter → Orchestrator → responder → tagged turn.

pub mod core;
pub mod types;

// =============================================================================
// BOUNDS [C]
// =============================================================================

/// Minimum trimmed character count before a document is treated as legible
pub const LEGIBILITY_MIN_CHARS: usize = 10;

/// Clause candidates collected into a summary
pub const SUMMARY_CLAUSE_LIMIT: usize = 12;

/// Non-blank lines included in the summary excerpt
pub const EXCERPT_LINE_COUNT: usize = 4;

/// Characters of document text forwarded to the document-QA responder.
/// Downstream model context is bounded; the prefix is cut on a char boundary.
pub const DOCUMENT_CONTEXT_CAP: usize = 15_000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
