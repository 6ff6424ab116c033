//! Binary overlap coefficients over 0/1-coded vectors.

use crate::error::{check_pair, InputError};

/// Count positions coded 1, and positions where both vectors are coded 1.
fn overlap_counts(v1: &[u8], v2: &[u8]) -> (f64, f64, f64) {
    let mut ones1 = 0u64;
    let mut ones2 = 0u64;
    let mut both = 0u64;
    for (&x, &y) in v1.iter().zip(v2.iter()) {
        ones1 += u64::from(x == 1);
        ones2 += u64::from(y == 1);
        both += u64::from(x == 1 && y == 1);
    }
    (ones1 as f64, ones2 as f64, both as f64)
}

/// Dice coefficient between two 0/1-coded vectors.
///
/// `2 * |intersection| / (|v1| + |v2|)`, where `|v|` counts the positions
/// coded 1. Returns NaN when both vectors are all-zero (0/0), mirroring the
/// estimator's indeterminate-result convention.
///
/// # Errors
/// - [`InputError::EmptyVector`] if either vector is empty
/// - [`InputError::LengthMismatch`] if the lengths differ
pub fn dice_coefficient(v1: &[u8], v2: &[u8]) -> Result<f64, InputError> {
    check_pair(v1.len(), v2.len())?;
    let (ones1, ones2, both) = overlap_counts(v1, v2);
    Ok(2.0 * both / (ones1 + ones2))
}

/// Jaccard coefficient between two 0/1-coded vectors.
///
/// `|intersection| / |union|` over the positions coded 1. Returns NaN when
/// both vectors are all-zero.
///
/// # Errors
/// - [`InputError::EmptyVector`] if either vector is empty
/// - [`InputError::LengthMismatch`] if the lengths differ
pub fn jaccard_coefficient(v1: &[u8], v2: &[u8]) -> Result<f64, InputError> {
    check_pair(v1.len(), v2.len())?;
    let (ones1, ones2, both) = overlap_counts(v1, v2);
    Ok(both / (ones1 + ones2 - both))
}
