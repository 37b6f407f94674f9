//! Text-generation collaborator.
//!
//! Everything here reads already-computed recommendations; nothing in the
//! ranking pipeline depends on this module or on the remote service being
//! reachable.

pub mod client;
pub mod consult;
pub mod prompt;

use serde::{Deserialize, Serialize};

pub use client::{AdvisorConfig, HttpTextGenerator, TextGenerator};
pub use consult::{load_knowledge, Consultation};
pub use prompt::AnalysisRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisorError {
    #[error("No API key configured (set {0})")]
    Disabled(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Service returned an empty response")]
    EmptyResponse,

    #[error("Cannot encode request: {0}")]
    Encoding(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
