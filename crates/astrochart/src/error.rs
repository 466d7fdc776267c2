use std::path::PathBuf;
use thiserror::Error;

/// Raised by [`crate::chart::ChartController`] when the input data is malformed.
///
/// Carries every message the validator produced, in the order the rules were checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .messages.join(" "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Errors that can occur when loading a chart configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
