//! Clause extractor: flags lines that look legally significant
//!
//! A line qualifies when it carries a `1.`-style numbering marker or one of
//! the fixed contract keywords. Bounded, order-preserving scan: no ranking,
//! the first `limit` qualifying lines win.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Clause;

/// Keywords that flag a line as a clause candidate (matched case-insensitively)
pub const CLAUSE_KEYWORDS: [&str; 9] = [
    "PAYMENT",
    "DELAY",
    "WARRANTY",
    "TERMINATION",
    "PENALTY",
    "AS-IS",
    "REFUND",
    "LIMITATION",
    "LIABILITY",
];

lazy_static! {
    // Numbered clause marker: an integer followed by a period, at line start
    static ref RE_NUMBERED: Regex = Regex::new(r"^\d+\.").unwrap();
}

/// Scans raw contract text for candidate clause lines
#[derive(Debug, Default)]
pub struct ClauseExtractor;

impl ClauseExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract up to `limit` clause candidates in document order.
    ///
    /// `line_index` counts non-blank lines; indices are strictly increasing
    /// within one result. Empty input yields an empty vec, never an error.
    pub fn extract(&self, text: &str, limit: usize) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let mut line_index = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if clauses.len() < limit && is_clause_candidate(line) {
                clauses.push(Clause::new(line, line_index));
            }
            line_index += 1;

            if clauses.len() >= limit {
                break;
            }
        }

        clauses
    }
}

/// A trimmed non-blank line qualifies on a numbering marker or a keyword hit
fn is_clause_candidate(line: &str) -> bool {
    if RE_NUMBERED.is_match(line) {
        return true;
    }
    let upper = line.to_uppercase();
    CLAUSE_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let extractor = ClauseExtractor::new();
        assert!(extractor.extract("", 10).is_empty());
        assert!(extractor.extract("   \n\n  \t\n", 10).is_empty());
    }

    #[test]
    fn test_numbered_clause_is_captured_verbatim() {
        let extractor = ClauseExtractor::new();
        let text = "SUPPLY CONTRACT\n\n1. PAYMENT TERMS: net 30 days.\nSome filler line.";
        let clauses = extractor.extract(text, 10);

        assert!(clauses
            .iter()
            .any(|c| c.text == "1. PAYMENT TERMS: net 30 days."));
    }

    #[test]
    fn test_line_index_counts_non_blank_lines() {
        let extractor = ClauseExtractor::new();
        // "1. PAYMENT ..." is the second non-blank line (index 1)
        let text = "Header line\n\n\n1. PAYMENT TERMS: net 30 days.";
        let clauses = extractor.extract(text, 10);

        let payment = clauses
            .iter()
            .find(|c| c.text.starts_with("1. PAYMENT"))
            .expect("payment clause extracted");
        assert_eq!(payment.line_index, 1);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let extractor = ClauseExtractor::new();
        let clauses = extractor.extract("the supplier offers no warranty at all", 10);
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_non_qualifying_lines_are_skipped() {
        let extractor = ClauseExtractor::new();
        let text = "This agreement is made between the parties.\nBoth act in good faith.";
        assert!(extractor.extract(text, 10).is_empty());
    }

    #[test]
    fn test_limit_stops_the_scan() {
        let extractor = ClauseExtractor::new();
        let text = "1. first\n2. second\n3. third\n4. fourth";
        let clauses = extractor.extract(text, 2);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].text, "1. first");
        assert_eq!(clauses[1].text, "2. second");
    }

    #[test]
    fn test_indices_strictly_increasing() {
        let extractor = ClauseExtractor::new();
        let text = "1. PAYMENT due\nfiller\n2. PENALTY applies\nfiller\n3. REFUND policy";
        let clauses = extractor.extract(text, 10);

        for pair in clauses.windows(2) {
            assert!(pair[0].line_index < pair[1].line_index);
        }
    }

    #[test]
    fn test_lines_are_trimmed() {
        let extractor = ClauseExtractor::new();
        let clauses = extractor.extract("   7. PENALTY: 2% per week   ", 10);
        assert_eq!(clauses[0].text, "7. PENALTY: 2% per week");
    }
}
