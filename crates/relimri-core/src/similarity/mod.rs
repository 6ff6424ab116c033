//! Similarity measures between paired volumes.
//!
//! This module provides the vector-level similarity measures used by
//! test-retest comparisons, plus [`image_similarity`], the masked and
//! thresholded dispatcher over a pair of flattened volumes:
//!
//! - **Binary overlap**: Dice and Jaccard coefficients over 0/1-coded vectors
//! - **Latent correlation**: the tetrachoric estimator (see
//!   [`crate::tetrachoric`])
//! - **Continuous correlation**: Pearson's r and Spearman's rho
//!
//! # Module Structure
//!
//! - `binary`: Dice/Jaccard coefficients
//! - `rank`: Pearson and Spearman correlation
//! - `image`: masking, thresholding and measure dispatch
//! - `error`: error types (`SimilarityError`)

mod binary;
mod error;
mod image;
mod rank;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;

// Re-export public types
pub use binary::{dice_coefficient, jaccard_coefficient};
pub use error::SimilarityError;
pub use image::{image_similarity, SimilarityKind};
pub use rank::{pearson_r, spearman_rho};
