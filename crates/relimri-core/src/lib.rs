//! Reliability and similarity measures for paired measurements.
//!
//! `relimri-core` computes statistical reliability/similarity measures between
//! paired neuroimaging volumes (or repeated measurements) for test-retest
//! reliability studies.
//!
//! # Architecture
//!
//! This crate defines:
//! - The tetrachoric correlation estimator for dichotomized (0/1) data
//!   ([`tetrachoric_corr`])
//! - Binary overlap and rank correlation measures with a masked/thresholded
//!   dispatcher ([`image_similarity`])
//! - Intraclass correlation over balanced subject x session ratings
//!   ([`sumsq_icc`], [`voxelwise_icc`])
//! - Error types and input validation shared across the measures
//!
//! Volume file loading and brain-mask computation live with the caller; every
//! entry point here takes already-extracted flattened vectors.
//!
//! # Example
//!
//! ```
//! use relimri_core::tetrachoric_corr;
//!
//! let rho = tetrachoric_corr(&[0, 0, 1, 1], &[0, 0, 1, 1]).unwrap();
//! assert_eq!(rho, 1.0);
//! ```

pub mod error;
pub mod icc;
pub mod similarity;
pub mod tetrachoric;

// Re-exports for convenience
pub use error::InputError;
pub use icc::{sumsq_icc, voxelwise_icc, IccError, IccEstimate, IccKind};
pub use similarity::{
    dice_coefficient, image_similarity, jaccard_coefficient, pearson_r, spearman_rho,
    SimilarityError, SimilarityKind,
};
pub use tetrachoric::{tetrachoric_corr, ContingencyTable};
