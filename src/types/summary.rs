//! Heuristic summary report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Clause, RiskFinding};

/// Deterministic analysis report for one contract.
///
/// Derived, recomputed on every request, never mutated after construction.
/// Equality is structural and excludes `generated_at`, so two summaries of
/// the same text compare equal regardless of when they were produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// First non-blank line of the contract, or a placeholder
    pub title: String,
    /// Leading non-blank lines, or the fixed "no legible text" notice
    pub excerpt: String,
    /// Candidate clauses in document order
    pub clauses: Vec<Clause>,
    /// Risk findings in pattern-evaluation order
    pub findings: Vec<RiskFinding>,
    /// One recommendation per finding, or a single manual-review note
    pub recommendations: Vec<String>,
    /// Perspective the report was written for (e.g. "buyer")
    pub audience: String,
    /// When this report was produced (presentation only)
    pub generated_at: DateTime<Utc>,
}

impl PartialEq for Summary {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.excerpt == other.excerpt
            && self.clauses == other.clauses
            && self.findings == other.findings
            && self.recommendations == other.recommendations
            && self.audience == other.audience
    }
}

impl Eq for Summary {}

impl Summary {
    /// Render the report as readable plain text, section by section.
    ///
    /// This is the substitute answer the orchestrator falls back to when a
    /// responder is unavailable, and the body of the CLI report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("CONTRACT REVIEW: {}\n", self.title));
        out.push_str(&format!("Reviewed for: {}\n\n", self.audience));
        out.push_str("Excerpt:\n");
        out.push_str(&self.excerpt);
        out.push('\n');

        if !self.clauses.is_empty() {
            out.push_str("\nKey clauses:\n");
            for clause in &self.clauses {
                out.push_str(&format!("  [{}] {}\n", clause.line_index, clause.text));
            }
        }

        if !self.findings.is_empty() {
            out.push_str("\nRisk findings:\n");
            for finding in &self.findings {
                out.push_str(&format!("  {} - {}\n", finding.pattern, finding.message));
            }
        }

        if !self.recommendations.is_empty() {
            out.push_str("\nRecommendations:\n");
            for rec in &self.recommendations {
                out.push_str(&format!("  - {rec}\n"));
            }
        }

        out
    }
}
