//! Completion backends.
//!
//! The backend is an opaque text generator: it gets a list of chat messages
//! plus sampling parameters and returns the raw reply text.

pub mod groq;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::UpstreamError;

pub use groq::{GroqClient, GroqSettings};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// One completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Something that turns a prompt into reply text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Provider name used in error messages.
    fn provider(&self) -> &str;

    /// Send `request` and return the raw text of the reply.
    async fn complete(&self, request: CompletionRequest) -> Result<String, UpstreamError>;
}
