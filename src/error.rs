//! Error types for sqlrelay.
//!
//! Defines the main error enum used throughout the application.
//!
//! Per-statement outcomes (HTTP failures, transport errors) are deliberately
//! NOT represented here — the run loop is best-effort and records those as
//! [`crate::exec::ExecOutcome`] values instead of propagating them.

use thiserror::Error;

/// Main error type for sqlrelay operations.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration errors (invalid config file, missing URL or key, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// SQL file errors (missing, unreadable) — fatal, aborts before any
    /// network activity.
    #[error("Load error: {0}")]
    Load(String),

    /// HTTP client construction errors.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a load error with the given message.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Creates an HTTP error with the given message.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Load(_) => "Load Error",
            Self::Http(_) => "HTTP Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using RelayError.
pub type Result<T> = std::result::Result<T, RelayError>;
