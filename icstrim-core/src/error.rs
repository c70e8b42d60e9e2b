//! Error types for icstrim.
//!
//! Malformed feeds never produce an error: bad records are dropped and bad
//! dates fall back to the sentinel. Only the helpers that take user input
//! can fail.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrimError {
    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for icstrim operations.
pub type TrimResult<T> = Result<T, TrimError>;
