//! Chat client engine for Chatline.
//!
//! Provides:
//! - The `Session` controller: conversation history, request lifecycle,
//!   and presentation events
//! - An HTTP backend for the remote chat service
//! - Reply pacing (the artificial "typing" delay)

pub mod http;
pub mod pacing;
pub mod session;
pub mod wire;

use async_trait::async_trait;

use chatline_common::ConversationTurn;

pub use http::{HttpBackend, HttpConfig};
pub use pacing::ReplyPacing;
pub use session::{ExchangeOutcome, IgnoreReason, Session, Submission};
pub use wire::{ApiInfo, ChatReply, HealthReport, ModelInfo, ModelsResponse};

/// Transport to the remote chat service.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Address shown to the user when the service cannot be reached.
    fn base_url(&self) -> &str;

    /// Probe the service's status endpoint.
    async fn health(&self) -> Result<HealthReport, ChatError>;

    /// Send `message` along with every turn recorded so far.
    async fn chat(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<ChatReply, ChatError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Timeout
        } else if err.is_decode() {
            ChatError::Decode(err.to_string())
        } else {
            ChatError::Network(err.to_string())
        }
    }
}
