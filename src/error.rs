//! Error types for entity-codegen
//!
//! This module defines the error hierarchy for the whole generator.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Only loading, writing and configuration problems are errors. Anomalies in
//! the records themselves (missing discriminator, unsupported values,
//! conflicting kinds) are absorbed by the inferencer and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for entity-codegen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Load Errors
    // ============================================================================
    #[error("Failed to read input '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input: {message}")]
    Load { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Write Errors
    // ============================================================================
    #[error("Failed to write artifact for entity '{entity}': {message}")]
    Write { entity: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Create a write error for an entity artifact
    pub fn write(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            entity: entity.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from reading or parsing the input
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::InputRead { .. } | Error::Load { .. } | Error::JsonParse(_) | Error::YamlParse(_)
        )
    }

    /// Whether this error came from persisting an artifact
    pub fn is_write_error(&self) -> bool {
        matches!(self, Error::Write { .. })
    }
}

/// Result type alias for entity-codegen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::load("expected an array");
        assert_eq!(err.to_string(), "Failed to parse input: expected an array");

        let err = Error::write("League", "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to write artifact for entity 'League': permission denied"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::load("bad").is_load_error());
        assert!(!Error::load("bad").is_write_error());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::from(json_err).is_load_error());

        assert!(Error::write("Sport", "disk full").is_write_error());
        assert!(!Error::config("bad").is_load_error());
        assert!(!Error::config("bad").is_write_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
