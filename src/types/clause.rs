//! Candidate clause lines

use serde::{Deserialize, Serialize};

/// One line of contract text flagged as potentially legally significant,
/// either by a `1.`-style numbering marker or by a keyword hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// The line, trimmed of surrounding whitespace
    pub text: String,
    /// Position among the non-blank lines of the source text (0-based).
    /// Strictly increasing within one extraction result.
    pub line_index: usize,
}

impl Clause {
    pub fn new(text: impl Into<String>, line_index: usize) -> Self {
        Self { text: text.into(), line_index }
    }
}
