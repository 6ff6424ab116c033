//! Pearson and Spearman correlation over continuous vectors.

use crate::error::{check_pair, InputError};

/// Pearson product-moment correlation between two vectors.
///
/// Returns NaN when either vector has zero variance (the covariance and the
/// variance product are both zero), matching numpy's `corrcoef`.
///
/// # Errors
/// - [`InputError::EmptyVector`] if either vector is empty
/// - [`InputError::LengthMismatch`] if the lengths differ
pub fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64, InputError> {
    check_pair(x.len(), y.len())?;

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    Ok(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Spearman rank correlation between two vectors.
///
/// Pearson's r over average-fractional ranks; tied values receive the mean of
/// the rank positions they occupy.
///
/// # Errors
/// - [`InputError::EmptyVector`] if either vector is empty
/// - [`InputError::LengthMismatch`] if the lengths differ
pub fn spearman_rho(x: &[f64], y: &[f64]) -> Result<f64, InputError> {
    check_pair(x.len(), y.len())?;
    pearson_r(&average_ranks(x), &average_ranks(y))
}

/// 1-based average-fractional ranks of a vector.
fn average_ranks(v: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..v.len()).collect();
    order.sort_by(|&a, &b| v[a].total_cmp(&v[b]));

    let mut ranks = vec![0.0; v.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && v[order[end + 1]] == v[order[start]] {
            end += 1;
        }
        // Mean of the 1-based positions start+1..=end+1.
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &i in &order[start..=end] {
            ranks[i] = rank;
        }
        start = end + 1;
    }
    ranks
}
