//! Configuration schema types for Chatline.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod pacing;
mod system;

pub use api::*;
pub use chat::*;
pub use pacing::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Chatline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatlineConfig {
    pub api: ApiConfig,
    pub pacing: PacingConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
