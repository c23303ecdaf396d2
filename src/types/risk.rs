//! Risk pattern identifiers and findings

use serde::{Deserialize, Serialize};

/// The fixed set of risky contractual idioms the scanner knows about.
///
/// Variant order is the scanner's evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskPattern {
    /// Full prepayment demanded before delivery
    AdvancePayment,
    /// Goods delivered "as-is", no warranty
    AsIsDelivery,
    /// Counterparty may terminate without notice
    UnilateralTermination,
    /// Liability capped; amount and exclusions need review
    LiabilityCap,
}

impl RiskPattern {
    /// Stable identifier for serialization and display
    pub fn id(&self) -> &'static str {
        match self {
            RiskPattern::AdvancePayment => "ADVANCE_PAYMENT",
            RiskPattern::AsIsDelivery => "AS_IS_DELIVERY",
            RiskPattern::UnilateralTermination => "UNILATERAL_TERMINATION",
            RiskPattern::LiabilityCap => "LIABILITY_CAP",
        }
    }
}

impl std::fmt::Display for RiskPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A matched risk idiom with its human-readable rationale.
///
/// One finding per pattern per document; a pattern that matches several
/// times in the text still yields a single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub pattern: RiskPattern,
    pub message: String,
}

impl RiskFinding {
    pub fn new(pattern: RiskPattern, message: impl Into<String>) -> Self {
        Self { pattern, message: message.into() }
    }
}
