//! Error types for swarmgate operations.
//!
//! This module defines [`SwarmGateError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SwarmGateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SwarmGateError::Other`) for unexpected errors
//! - Nothing is retried; every error reaches the operator

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for swarmgate operations.
#[derive(Debug, Error)]
pub enum SwarmGateError {
    /// The prerequisite evaluator did not return exactly one response.
    #[error("Prerequisite evaluation unavailable: {message}")]
    EvaluationUnavailable { message: String },

    /// Operator input or a lookup result could not be used.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A gate trigger was fired in a state that does not accept it.
    #[error("Cannot {trigger} while the gate is {state}")]
    InvalidTransition { trigger: String, state: String },

    /// A usage analysis is already running.
    #[error("Usage analysis is already in progress")]
    AnalysisInFlight,

    /// The management API answered with a non-success status.
    #[error("Management API returned HTTP {status} for {url}")]
    Api { status: u16, url: String },

    /// The management API could not be reached or its answer could not be decoded.
    #[error("Management API request failed: {message}")]
    Transport { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for SwarmGateError {
    fn from(err: reqwest::Error) -> Self {
        SwarmGateError::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type alias for swarmgate operations.
pub type Result<T> = std::result::Result<T, SwarmGateError>;
