//! Heuristic summarizer: deterministic contract report
//!
//! Composes the clause extractor and risk scanner into a `Summary`. Pure
//! function of its inputs; the same text always yields a structurally
//! identical report. Used directly by the CLI and as the orchestrator's
//! substitute answer when a responder is unavailable.

use chrono::Utc;

use crate::core::{ClauseExtractor, RiskScanner};
use crate::types::Summary;
use crate::{EXCERPT_LINE_COUNT, LEGIBILITY_MIN_CHARS, SUMMARY_CLAUSE_LIMIT};

/// Notice shown when the ingested text is too short to analyze.
/// Short or empty extraction output is a normal outcome, not an error.
pub const ILLEGIBLE_NOTICE: &str =
    "No legible contract text was provided. Upload or paste the contract body to run the review.";

/// Fallback title when the text has no non-blank line
pub const UNTITLED: &str = "Untitled contract";

/// Recommendation used when no risk pattern fired
pub const MANUAL_REVIEW_NOTE: &str =
    "No high-severity risk pattern was detected automatically; a manual legal review is still advised.";

/// Produces deterministic contract summaries
#[derive(Debug, Default)]
pub struct HeuristicSummarizer {
    extractor: ClauseExtractor,
    scanner: RiskScanner,
}

impl HeuristicSummarizer {
    pub fn new() -> Self {
        Self {
            extractor: ClauseExtractor::new(),
            scanner: RiskScanner::new(),
        }
    }

    /// Summarize `text` for the given `audience` (e.g. "buyer").
    ///
    /// Text whose trimmed length is below the legibility threshold yields
    /// the fixed notice with empty clauses, findings, and recommendations.
    pub fn summarize(&self, text: &str, audience: &str) -> Summary {
        if text.trim().chars().count() < LEGIBILITY_MIN_CHARS {
            return Summary {
                title: UNTITLED.to_string(),
                excerpt: ILLEGIBLE_NOTICE.to_string(),
                clauses: Vec::new(),
                findings: Vec::new(),
                recommendations: Vec::new(),
                audience: audience.to_string(),
                generated_at: Utc::now(),
            };
        }

        let non_blank: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let title = non_blank.first().map_or(UNTITLED, |l| *l).to_string();
        let excerpt = non_blank
            .iter()
            .take(EXCERPT_LINE_COUNT)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let clauses = self.extractor.extract(text, SUMMARY_CLAUSE_LIMIT);
        let findings = self.scanner.detect(text);

        let recommendations = if findings.is_empty() {
            vec![MANUAL_REVIEW_NOTE.to_string()]
        } else {
            findings.iter().map(|f| f.message.clone()).collect()
        };

        Summary {
            title,
            excerpt,
            clauses,
            findings,
            recommendations,
            audience: audience.to_string(),
            generated_at: Utc::now(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
