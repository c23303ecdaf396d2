//! Core components for ProcureWatch

pub mod clause_extractor;
pub mod risk_scanner;
pub mod summarizer;
pub mod router;
pub mod orchestrator;

pub use clause_extractor::ClauseExtractor;
pub use risk_scanner::RiskScanner;
pub use summarizer::HeuristicSummarizer;
pub use router::IntentRouter;
pub use orchestrator::{Orchestrator, Responders};
