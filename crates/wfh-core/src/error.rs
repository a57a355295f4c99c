//! Core error types for wfh-core.
//!
//! The session engine and the progress aggregation never raise on their own;
//! errors belong to the storage and I/O boundaries and are defined here with
//! thiserror so callers can match on them.

use thiserror::Error;

/// Core error type for wfh-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Email is already registered
    #[error("User already exists")]
    DuplicateEmail(String),

    /// No user with the given id
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// A lock guarding the store was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Validation errors raised at the storage boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Day key outside the 21-day challenge span
    #[error("Day {0} is outside the 21-day challenge")]
    DayOutOfRange(u8),

    /// Self-rated metric outside the 0-10 scale
    #[error("{metric} for day {day} must be between 0 and 10, got {value}")]
    MetricOutOfRange {
        day: u8,
        metric: &'static str,
        value: u8,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
