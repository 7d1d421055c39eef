//! Error handling for tabbox
//!
//! Provides the error types for every layer of a generation run:
//! - Parameter errors (configuration values and geometric preconditions)
//! - Box errors (loading, serialization, output)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Errors related to configuration validation and geometric preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// An edge is too short to host a single tab cycle.
    #[error("Edge of length {length} is too short for one tab cycle (minimum {minimum})")]
    EdgeTooShort { length: f64, minimum: f64 },

    /// Dimensions are invalid (zero, negative or consumed by kerf correction).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Errors that can occur during a box generation run.
#[derive(Error, Debug)]
pub enum BoxError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// JSON serialization/deserialization error, including missing or
    /// ill-typed configuration keys.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while reading configuration or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for generation runs.
pub type BoxResult<T> = Result<T, BoxError>;
