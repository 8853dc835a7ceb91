//! Error types for BigOh

use thiserror::Error;

/// Main error type for BigOh operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BigOhError {
    /// Identifier outside the closed set of algorithms
    #[error("Invalid algorithm identifier: {0} (expected 1..=6)")]
    InvalidIdentifier(i64),

    /// Identifier text that is not a number at all
    #[error("Cannot parse algorithm identifier from {0:?}")]
    Parse(String),

    /// Extrapolation from a problem size of zero
    #[error("Cannot extrapolate from a problem size of zero")]
    ZeroProblemSize,

    /// Percent error against a reference timing of zero
    #[error("Reference timing is zero; relative error is undefined")]
    ZeroReferenceTiming,

    /// Negative, NaN or infinite timing
    #[error("Invalid timing: {0} s")]
    InvalidTiming(f64),

    /// Failure inside an algorithm runner
    #[error("Runner error: {0}")]
    Runner(String),
}

/// Result type alias for BigOh operations
pub type Result<T> = std::result::Result<T, BigOhError>;
