//! Tetrachoric correlation for dichotomized (0/1) data.
//!
//! Estimates the correlation between two latent continuous normally-distributed
//! variables given only their binary-thresholded observations, using the
//! closed-form cosine approximation
//!
//! ```text
//! rho = cos( pi / (1 + sqrt(A*D / B / C)) )
//! ```
//!
//! where A, B, C, D are the cells of the 2x2 contingency table over the paired
//! observations.
//!
//! # Degenerate tables
//!
//! The estimator carries no special cases; the degenerate cells resolve
//! through IEEE f64 arithmetic:
//! - no discordant pairs but both concordant cells occupied (identical vectors
//!   containing a 0 and a 1): the ratio is `+inf` and the result is exactly 1.0
//! - a zero concordant product together with an empty discordant cell: a `0/0`
//!   appears in the chain and the result is NaN
//! - no concordant pairs (exact complements): the ratio is 0 and the result is
//!   exactly -1.0
//!
//! Callers aggregating many correlations decide their own NaN policy; an
//! indeterminate estimate is a normal return value here, not an error.

mod contingency;

#[cfg(test)]
mod tests;

pub use contingency::ContingencyTable;

use std::f64::consts::PI;

use crate::error::{check_pair, InputError};

/// Tetrachoric correlation between two 0/1-coded vectors.
///
/// # Arguments
/// - `v1`: First binary vector
/// - `v2`: Second binary vector, same length
///
/// # Returns
/// The estimate in `[-1.0, 1.0]`, or NaN when the contingency table is
/// degenerate (see the module docs). Elements outside {0, 1} are undefined
/// behavior for this estimator and are not validated.
///
/// # Errors
/// - [`InputError::EmptyVector`] if either vector is empty
/// - [`InputError::LengthMismatch`] if the lengths differ
///
/// # Example
/// ```
/// use relimri_core::tetrachoric_corr;
///
/// let rho = tetrachoric_corr(&[0, 0, 1, 1], &[0, 1, 0, 1]).unwrap();
/// assert!(rho.abs() < 1e-12);
/// ```
pub fn tetrachoric_corr(v1: &[u8], v2: &[u8]) -> Result<f64, InputError> {
    check_pair(v1.len(), v2.len())?;

    let table = ContingencyTable::from_pair(v1, v2);

    // Evaluated strictly as (A*D / B) / C: the degenerate cells must flow
    // through IEEE division (inf and 0/0 -> NaN), not explicit branches.
    let ad = (table.both_absent * table.both_present) as f64;
    let ratio = ad / table.only_second as f64 / table.only_first as f64;

    Ok((PI / (1.0 + ratio.sqrt())).cos())
}
