//! HTTP backend struct, URL building, and response checking.

use chatline_common::ConversationTurn;

use crate::wire::ChatRequest;
use crate::ChatError;

use super::config::HttpConfig;

pub(crate) const HEALTH_PATH: &str = "/health";
pub(crate) const CHAT_PATH: &str = "/api/v1/chat/";
pub(crate) const MODELS_PATH: &str = "/api/v1/chat/models";

/// Longest error body excerpt kept in `ChatError::Status`.
const ERROR_BODY_LIMIT: usize = 200;

/// Chat service client. Cookies are never stored or sent.
#[derive(Debug)]
pub struct HttpBackend {
    pub(crate) config: HttpConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(crate) fn build_chat_request<'a>(
        &'a self,
        message: &'a str,
        history: &'a [ConversationTurn],
    ) -> ChatRequest<'a> {
        ChatRequest {
            message,
            conversation_history: history,
            system_prompt: self.config.system_prompt.as_deref(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Turn a non-2xx response into `ChatError::Status`.
    pub(crate) async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChatError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(ChatError::Status {
            status: status.as_u16(),
            body: text.chars().take(ERROR_BODY_LIMIT).collect(),
        })
    }
}
