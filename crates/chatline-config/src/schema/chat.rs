use serde::{Deserialize, Serialize};

/// Optional generation parameters forwarded with every chat request.
/// Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub system_prompt: Option<String>,
    /// Valid range: 0.0-2.0.
    pub temperature: Option<f64>,
    /// Valid range: 1-4000.
    pub max_tokens: Option<u32>,
}
