//! Reading `config.toml` into a [`ChatlineConfig`].

use crate::schema::ChatlineConfig;
use chatline_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Parse the config at `path`.
///
/// Missing fields take their serde defaults. Values are not range-checked
/// here; [`crate::load_config`] does that before anything uses them.
pub fn load_from_path(path: &Path) -> Result<ChatlineConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("cannot read {}: {e}", path.display())))?;
    let config = toml::from_str::<ChatlineConfig>(&raw)
        .map_err(|e| ConfigError::ParseError(format!("{} is not valid config TOML: {e}", path.display())))?;

    info!("chatline config loaded from {}", path.display());
    Ok(config)
}

/// Parse the config at [`default_config_path`], seeding it from the
/// template on first run.
pub fn load_default() -> Result<ChatlineConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(ChatlineConfig::default())
        }
        other => other,
    }
}
