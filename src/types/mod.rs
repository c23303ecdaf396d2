//! Core types for ProcureWatch

mod document;
mod clause;
mod risk;
mod summary;
mod route;
mod turn;
mod error;

pub use document::Document;
pub use clause::Clause;
pub use risk::{RiskFinding, RiskPattern};
pub use summary::Summary;
pub use route::RouteDecision;
pub use turn::{ConversationTurn, Role};
pub use error::ResponderError;
