//! Error types for the contact phone resolver.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by a contact directory.
///
/// The resolver never wraps or retries these; they reach the caller exactly
/// as the directory produced them.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The backing contact store cannot be reached
    #[error("Contact directory unavailable: {0}")]
    Unavailable(String),

    /// A single lookup failed
    #[error("Directory lookup '{operation}' failed: {reason}")]
    LookupFailed {
        operation: &'static str,
        reason: String,
    },

    /// Failed to read a contacts file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a contacts file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Mobile number pattern does not compile
    #[error("Invalid mobile pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
