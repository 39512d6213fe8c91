//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ChatlineConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_base_url() {
    let mut config = ChatlineConfig::default();
    config.api.base_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url is empty"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = ChatlineConfig::default();
    config.api.base_url = "ftp://127.0.0.1:8000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
}

#[test]
fn accepts_https_base_url() {
    let mut config = ChatlineConfig::default();
    config.api.base_url = "https://chat.example.com/".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn standalone_base_url_check() {
    assert!(validate_base_url("--base-url", "http://10.0.0.5:8000").is_ok());

    let err = validate_base_url("--base-url", "localhost:8000").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("--base-url"));
    assert!(msg.contains("http:// or https://"));
    assert!(validate_base_url("--base-url", "").is_err());
}

#[test]
fn catches_zero_timeout() {
    let mut config = ChatlineConfig::default();
    config.api.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.request_timeout_secs"));
}

#[test]
fn catches_inverted_pacing_window() {
    let mut config = ChatlineConfig::default();
    config.pacing.min_delay_ms = 2000;
    config.pacing.max_delay_ms = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pacing.min_delay_ms"));
}

#[test]
fn catches_empty_pacing_window() {
    let mut config = ChatlineConfig::default();
    config.pacing.min_delay_ms = 1500;
    config.pacing.max_delay_ms = 1500;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_excessive_pacing_delay() {
    let mut config = ChatlineConfig::default();
    config.pacing.max_delay_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pacing.max_delay_ms"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = ChatlineConfig::default();
    config.chat.temperature = Some(2.5);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.temperature"));
}

#[test]
fn catches_max_tokens_out_of_range() {
    let mut config = ChatlineConfig::default();
    config.chat.max_tokens = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.max_tokens"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ChatlineConfig::default();
    config.api.base_url = String::new();
    config.chat.max_tokens = Some(10_000);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
    assert!(err.contains("chat.max_tokens"));
    assert!(err.contains("; "));
}
