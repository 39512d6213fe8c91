//! Chatline configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatline_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.api.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ApiConfig, ChatConfig, ChatlineConfig, LogLevel, LoggingConfig, PacingConfig,
    CONFIG_SCHEMA_VERSION, DEFAULT_BASE_URL,
};

use std::path::Path;

use chatline_common::ConfigError;

/// Load and validate config.
///
/// With an explicit path the file must exist. Without one, the platform
/// default is used and created from the template if missing.
pub fn load_config(path: Option<&Path>) -> Result<ChatlineConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nmax_tokens = 0\n").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_requires_explicit_file() {
        let err = load_config(Some(Path::new("/tmp/chatline_missing_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pacing]\nenabled = false\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert!(!config.pacing.enabled);
    }
}
