//! Error types for loading and validating projection inputs
//!
//! The projection engine, alignment scorer and suggestion generator are
//! total on well-formed input and never return these errors. They come from
//! the edges: reading case files and validating caller input.

use thiserror::Error;

/// A specialized Result type for projection input handling.
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown event frequency: {0}")]
    UnknownFrequency(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Input rejected by the validation layer
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Offending field, e.g. `events[2].amount`
        field: String,
        reason: String,
    },
}

impl ProjectionError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ProjectionError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
