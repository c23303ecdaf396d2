//! Ingested contract document

use serde::{Deserialize, Serialize};

/// An ingested contract: the raw text plus its character length.
///
/// Immutable value, created once per contract by an external text source
/// (PDF or plain-text extraction). Loading a new contract supersedes the
/// old `Document`; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Full contract text as extracted
    pub raw_text: String,
    /// Length in Unicode scalar values
    pub char_length: usize,
}

impl Document {
    /// Wrap extracted text into a document
    pub fn new(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let char_length = raw_text.chars().count();
        Self { raw_text, char_length }
    }
}
