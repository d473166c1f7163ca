//! Error handling.
//!
//! This module provides a custom error type for the project.

use colored::*;
use std::fmt;

/// Result type alias for the autocomplete configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main error type for loading and reading the autocomplete configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Invalid command line arguments.
    InvalidArguments(String),

    /// A configuration source could not be parsed.
    /// `origin` names the source, e.g. a file path or `env:AUTOCOMPLETE_DEBOUNCE_TIME_MS`.
    MalformedConfig { origin: String, reason: String },

    /// A value parsed fine but is outside the accepted range.
    InvalidValue { field: String, reason: String },

    /// Lookup by a field name that does not exist.
    UnknownField(String),

    /// File access error.
    FileAccessError { path: String, reason: String },

    /// The process-wide record was already installed.
    AlreadyInitialized,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg: String;
        match self {
            ConfigError::InvalidArguments(msg) => {
                warn_msg = format!("Invalid arguments: {}", msg);
            }
            ConfigError::MalformedConfig { origin, reason } => {
                warn_msg = format!("Malformed config: {}\n reason: {}", origin, reason);
            }
            ConfigError::InvalidValue { field, reason } => {
                warn_msg = format!("Invalid value for {}: {}", field, reason);
            }
            ConfigError::UnknownField(name) => {
                warn_msg = format!("Unknown field: {}", name);
            }
            ConfigError::FileAccessError { path, reason } => {
                warn_msg = format!("File access error: Path: {}\n Reason: {}", path, reason);
            }
            ConfigError::AlreadyInitialized => {
                warn_msg = "Configuration already initialized".to_string();
            }
        }
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::MalformedConfig {
            origin: "toml".to_string(),
            reason: err.message().to_string(),
        }
    }
}

impl ConfigError {
    /// Create an invalid arguments error
    pub fn invalid_arguments(msg: &str) -> Self {
        ConfigError::InvalidArguments(msg.to_string())
    }

    /// Create a malformed config error with its origin
    pub fn malformed(origin: &str, reason: &str) -> Self {
        ConfigError::MalformedConfig {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid value error for a field
    pub fn invalid_value(field: &str, reason: &str) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        ConfigError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            ConfigError::InvalidArguments(_) => {
                Some("Run with --help to see the accepted arguments.".to_string())
            }
            ConfigError::MalformedConfig { .. } => {
                Some("Check the config file syntax and environment overrides.".to_string())
            }
            ConfigError::InvalidValue { .. } => {
                Some("Adjust the value or remove it to use the default.".to_string())
            }
            ConfigError::UnknownField(_) => {
                Some("Run without --field to list every field name.".to_string())
            }
            ConfigError::FileAccessError { .. } => {
                Some("Check file permissions and try again.".to_string())
            }
            ConfigError::AlreadyInitialized => None,
        }
    }
}
