//! Shared input-validation error type.
//!
//! Every measure in this crate consumes a pair of equal-length vectors;
//! [`InputError`] covers the precondition failures they all share. Violations
//! are detected eagerly, before any computation, and are never defaulted to a
//! numeric result.

use thiserror::Error;

/// Precondition violations on paired input vectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Empty vector provided; every measure requires length > 0.
    #[error("empty input vector: length must be > 0")]
    EmptyVector,

    /// The two vectors of a pair have different lengths.
    #[error("input vectors must have the same length: first has {left}, second has {right}")]
    LengthMismatch {
        /// Length of the first vector
        left: usize,
        /// Length of the second vector
        right: usize,
    },
}

/// Validate a pair of vector lengths: both positive, both equal.
pub(crate) fn check_pair(left: usize, right: usize) -> Result<(), InputError> {
    if left == 0 || right == 0 {
        return Err(InputError::EmptyVector);
    }
    if left != right {
        return Err(InputError::LengthMismatch { left, right });
    }
    Ok(())
}
