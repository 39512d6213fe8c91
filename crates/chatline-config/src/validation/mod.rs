//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod api;
mod chat;
mod helpers;
mod pacing;

#[cfg(test)]
mod tests;

pub use api::validate_base_url;

use crate::schema::ChatlineConfig;
use chatline_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatlineConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    pacing::validate_pacing(&mut errors, config);
    chat::validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
