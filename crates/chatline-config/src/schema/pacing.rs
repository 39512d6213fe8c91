use serde::{Deserialize, Serialize};

/// Artificial delay before a successful reply is shown, so answers
/// don't appear instantaneously. The delay is drawn from
/// `[min_delay_ms, max_delay_ms)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub enabled: bool,
    pub min_delay_ms: u32,
    /// Exclusive upper bound (max 60000).
    pub max_delay_ms: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_delay_ms: 1000,
            max_delay_ms: 2000,
        }
    }
}
