//! Error types for the pagination strip
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Rendering itself degrades by omission; the only render-time failure is a
//! state that cannot produce a usable query string.

use thiserror::Error;

/// The main error type for the pagination strip
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Pagination State Errors
    // ============================================================================
    #[error("Invalid pagination state field '{field}': {message}")]
    InvalidState { field: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidState {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error came from the pagination state rather than the caller's config
    pub fn is_state_error(&self) -> bool {
        matches!(self, Error::InvalidState { .. })
    }
}

/// Result type alias for the pagination strip
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

        let err = Error::invalid_state("page_param", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid pagination state field 'page_param': must not be empty"
        );

        let err = Error::file_not_found("state.yaml");
        assert_eq!(err.to_string(), "File not found: state.yaml");
    }

    #[test]
    fn test_is_state_error() {
        assert!(Error::invalid_state("separator_param", "empty").is_state_error());
        assert!(!Error::config("test").is_state_error());
        assert!(!Error::file_not_found("x").is_state_error());
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

    #[test]
    fn test_result_with_context_lazy() {
        let result: Result<()> = Err(Error::invalid_state("rows", "bad"));
        let err = result
            .with_context(|| "loading state.yaml".to_string())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading state.yaml: Invalid pagination state field 'rows': bad"
        );
    }
}
