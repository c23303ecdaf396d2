//! Conversation turn model
//!
//! A conversation is a caller-owned, append-only `Vec<ConversationTurn>`:
//! one user turn plus one assistant turn per `Orchestrator::handle` call.
//! The caller clears it in bulk to reset a session; this core never does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One contribution to the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    /// Label of the responder that produced an assistant turn
    /// ("search", "document", "general", or "fallback"); None on user turns
    pub handled_by: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// New user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            handled_by: None,
            timestamp: Utc::now(),
        }
    }

    /// New assistant turn tagged with the responder that handled it
    pub fn assistant(content: impl Into<String>, handled_by: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            handled_by: Some(handled_by.into()),
            timestamp: Utc::now(),
        }
    }
}
