//! ChatBackend implementation for HttpBackend, plus informational endpoints.

use async_trait::async_trait;
use tracing::{debug, warn};

use chatline_common::ConversationTurn;

use crate::wire::{ApiInfo, ChatReply, HealthReport, ModelsResponse};
use crate::{ChatBackend, ChatError};

use super::client::{HttpBackend, CHAT_PATH, HEALTH_PATH, MODELS_PATH};

#[async_trait]
impl ChatBackend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn health(&self) -> Result<HealthReport, ChatError> {
        let url = self.url(HEALTH_PATH);
        debug!(%url, "health probe");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let body = response.text().await?;
        let report = serde_json::from_str::<HealthReport>(&body).unwrap_or_else(|e| {
            warn!(error = %e, "health body not understood, ignoring");
            HealthReport::default()
        });
        Ok(report)
    }

    async fn chat(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<ChatReply, ChatError> {
        let url = self.url(CHAT_PATH);
        let body = self.build_chat_request(message, history);

        debug!(%url, history = history.len(), "chat request");

        let response = self.http.post(&url).json(&body).send().await?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        let reply: ChatReply =
            serde_json::from_str(&text).map_err(|e| ChatError::Decode(e.to_string()))?;

        debug!(
            model = reply.model_used.as_deref().unwrap_or("unknown"),
            tokens = reply.tokens_used.unwrap_or(0),
            "chat reply"
        );
        Ok(reply)
    }
}

impl HttpBackend {
    /// `GET /` service description.
    pub async fn info(&self) -> Result<ApiInfo, ChatError> {
        let response = self.http.get(self.url("/")).send().await?;
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ChatError::Decode(e.to_string()))
    }

    /// Models the service can answer with.
    pub async fn models(&self) -> Result<ModelsResponse, ChatError> {
        let response = self.http.get(self.url(MODELS_PATH)).send().await?;
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ChatError::Decode(e.to_string()))
    }
}
