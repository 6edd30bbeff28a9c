//! Error types for configuration parsing and algorithm verification.
//!
//! A wrong benchmark result is never an error: it is recorded as a failed
//! [`TrialOutcome`](crate::utils::trial::TrialOutcome). These types cover
//! the cases where the harness itself cannot proceed.

use thiserror::Error;

/// Command-line configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("{option} of {size} exceeds the maximum array length of {max}")]
    SizeTooLarge {
        option: &'static str,
        size: usize,
        max: usize,
    },
}

/// Correctness check failures reported by `BenchmarkSubject::verify`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("'{algorithm}' produced an unsorted result for input length {len}")]
    SortMismatch { algorithm: &'static str, len: usize },

    #[error("'{algorithm}' searching for {target}: expected {expected:?}, got {actual:?}")]
    SearchMismatch {
        algorithm: &'static str,
        target: i32,
        expected: Option<usize>,
        actual: Option<usize>,
    },
}
