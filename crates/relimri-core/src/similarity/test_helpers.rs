//! Test helper generating synthetic correlated volume pairs.

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;

use super::rank::pearson_r;

/// Draw a pair of standard-normal vectors whose empirical Pearson r is within
/// `tol` of `r`, by rejection sampling over `y = r*x + sqrt(1 - r^2)*z`.
///
/// Tolerances much below .005 at small lengths make the loop slow; tests use
/// lengths in the thousands where a handful of draws suffices.
pub fn correlated_pair(r: f64, len: usize, tol: f64, rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    loop {
        let x: Vec<f64> = (0..len).map(|_| rng.sample(StandardNormal)).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|&xi| {
                let z: f64 = rng.sample(StandardNormal);
                r * xi + (1.0 - r * r).sqrt() * z
            })
            .collect();
        let empirical = pearson_r(&x, &y).expect("draws have equal positive length");
        if (empirical - r).abs() <= tol {
            return (x, y);
        }
    }
}
