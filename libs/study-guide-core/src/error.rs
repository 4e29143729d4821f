//! Error types for study-guide-core.

use thiserror::Error;

/// Result type alias using MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur when building or configuring a matcher.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("missing reference text")]
    MissingReference,

    #[error("invalid correctness threshold {value}: must be between 0.0 and 1.0")]
    InvalidThreshold { value: f64 },
}
