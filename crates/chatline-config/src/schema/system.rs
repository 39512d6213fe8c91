//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the chatline crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "chatline=trace",
            LogLevel::Debug => "chatline=debug",
            LogLevel::Info => "chatline=info",
            LogLevel::Warn => "chatline=warn",
            LogLevel::Error => "chatline=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
