//! Where chatline keeps its config file, and seeding it on first run.

use chatline_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "chatline";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/chatline/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            ConfigError::ParseError("no platform config directory, pass --config instead".into())
        })
}

/// Seed `path` with the commented template, creating parent directories.
///
/// A file that is already there is left alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        debug!("config already present at {}", path.display());
        return Ok(());
    }

    let seed_err = |target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot seed chatline config at {}: {e}", target.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| seed_err(dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| seed_err(path, e))?;

    info!("wrote starter config to {}", path.display());
    Ok(())
}
