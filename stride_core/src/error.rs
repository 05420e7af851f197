//! Error types for the stride_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Record had the wrong number of comma-separated fields
    #[error("Invalid record format: expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// Step count was not an integer or not positive
    #[error("Invalid step count {value:?}: {reason}")]
    StepParse { value: String, reason: String },

    /// Duration literal could not be parsed
    #[error("Invalid duration {literal:?}: {reason}")]
    DurationParse { literal: String, reason: String },

    /// A formula input was zero, negative or NaN
    #[error("Invalid {parameter}: must be positive, got {value}")]
    ProfileValidation {
        parameter: &'static str,
        value: String,
    },

    /// Activity label did not match any known spelling
    #[error("Unknown activity type: {0}")]
    UnknownActivity(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn step_parse(value: &str, reason: impl Into<String>) -> Self {
        Error::StepParse {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn duration_parse(literal: &str, reason: impl Into<String>) -> Self {
        Error::DurationParse {
            literal: literal.to_string(),
            reason: reason.into(),
        }
    }
}
