//! JSON bodies exchanged with the chat service.

use serde::{Deserialize, Serialize};

use chatline_common::ConversationTurn;

/// `POST /api/v1/chat/` request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub conversation_history: &'a [ConversationTurn],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// `POST /api/v1/chat/` response body. Only `response` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub tokens_used: Option<u64>,
}

/// `GET /health` body. The probe only needs a 2xx status, so every field
/// is optional and an undecodable body yields the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthReport {
    pub status: Option<String>,
    pub timestamp: Option<String>,
    pub version: Option<String>,
}

/// `GET /` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub health_check: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /api/v1/chat/models` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub available_models: Vec<ModelInfo>,
    #[serde(default)]
    pub current_model: Option<String>,
}
