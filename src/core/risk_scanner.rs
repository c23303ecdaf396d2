//! Risk scanner: detects known risky contractual idioms
//!
//! Four fixed patterns evaluated in a fixed order over the whole text.
//! Each pattern fires at most once per call regardless of how many times
//! it occurs; zero matches is a normal "nothing found" outcome.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{RiskFinding, RiskPattern};

lazy_static! {
    // =========================================================================
    // Pattern 1: ADVANCE_PAYMENT
    // "100%" within a short span of "advance" (either order), or "pay...100%"
    // =========================================================================
    static ref RE_ADVANCE_PAYMENT: Regex = Regex::new(
        r"(?is)100\s*%.{0,60}\badvance\b|\badvance\b.{0,60}100\s*%|\bpay\w*\b.{0,60}100\s*%|100\s*%.{0,60}\bpay\w*\b"
    ).unwrap();

    // =========================================================================
    // Pattern 2: AS_IS_DELIVERY
    // =========================================================================
    static ref RE_AS_IS: Regex = Regex::new(r"(?i)\bas[- ]is\b").unwrap();

    // =========================================================================
    // Pattern 3: UNILATERAL_TERMINATION
    // "terminate", any intervening words, then "without (prior) notice"
    // =========================================================================
    static ref RE_UNILATERAL_TERMINATION: Regex = Regex::new(
        r"(?is)\bterminat\w*\b.*?\bwithout\s+(?:prior\s+)?notice\b"
    ).unwrap();

    // =========================================================================
    // Pattern 4: LIABILITY_CAP
    // "cap" as a word, co-occurring anywhere with liability/responsibility
    // =========================================================================
    static ref RE_CAP: Regex = Regex::new(r"(?i)\bcap(?:s|ped|ping)?\b").unwrap();
    static ref RE_LIABILITY: Regex = Regex::new(
        r"(?i)\b(?:liabilit(?:y|ies)|responsibilit(?:y|ies))\b"
    ).unwrap();
}

const MSG_ADVANCE_PAYMENT: &str =
    "Payment 100% in advance detected — possible cashflow/risk for buyer.";
const MSG_AS_IS: &str =
    "AS-IS delivery clause found — consider requiring inspection or warranty.";
const MSG_UNILATERAL_TERMINATION: &str =
    "Unilateral termination without notice — high risk.";
const MSG_LIABILITY_CAP: &str =
    "Liability cap detected — check amount and exclusions.";

/// Scans whole-document text for the fixed risk pattern set
#[derive(Debug, Default)]
pub struct RiskScanner;

impl RiskScanner {
    pub fn new() -> Self {
        Self
    }

    /// Detect risk idioms in `text`.
    ///
    /// Result order is pattern-evaluation order, not position in the text.
    /// An empty result means "no high-severity automatic finding", never
    /// a failure.
    pub fn detect(&self, text: &str) -> Vec<RiskFinding> {
        let mut findings = Vec::new();

        if RE_ADVANCE_PAYMENT.is_match(text) {
            findings.push(RiskFinding::new(
                RiskPattern::AdvancePayment,
                MSG_ADVANCE_PAYMENT,
            ));
        }
        if RE_AS_IS.is_match(text) {
            findings.push(RiskFinding::new(RiskPattern::AsIsDelivery, MSG_AS_IS));
        }
        if RE_UNILATERAL_TERMINATION.is_match(text) {
            findings.push(RiskFinding::new(
                RiskPattern::UnilateralTermination,
                MSG_UNILATERAL_TERMINATION,
            ));
        }
        if RE_CAP.is_match(text) && RE_LIABILITY.is_match(text) {
            findings.push(RiskFinding::new(
                RiskPattern::LiabilityCap,
                MSG_LIABILITY_CAP,
            ));
        }

        findings
    }
}

// =============================================================================
// TESTS
// =============================================================================
