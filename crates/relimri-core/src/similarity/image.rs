//! Masking, thresholding and measure dispatch over paired volumes.

use serde::{Deserialize, Serialize};

use crate::error::{check_pair, InputError};
use crate::tetrachoric::tetrachoric_corr;

use super::binary::{dice_coefficient, jaccard_coefficient};
use super::error::SimilarityError;
use super::rank::{pearson_r, spearman_rho};

/// Similarity measure selector for [`image_similarity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityKind {
    /// Dice coefficient over thresholded voxels.
    Dice,
    /// Jaccard coefficient over thresholded voxels.
    Jaccard,
    /// Tetrachoric correlation over thresholded voxels.
    Tetrachoric,
    /// Pearson's r over raw intensities.
    Pearson,
    /// Spearman's rho over raw intensities.
    Spearman,
}

impl SimilarityKind {
    /// Whether the measure operates on binarized voxels and needs a threshold.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Dice | Self::Jaccard | Self::Tetrachoric)
    }
}

/// Similarity between two flattened volumes.
///
/// Applies the optional binary `mask` (a voxel is retained iff its mask value
/// is 1), then dispatches on `kind`:
///
/// - binary measures require `thresh` and code a voxel 1 iff its intensity is
///   strictly greater than the threshold;
/// - continuous measures reject a supplied threshold.
///
/// # Errors
/// - [`SimilarityError::Input`] on empty/mismatched volumes or mask, or when
///   the mask retains no voxels
/// - [`SimilarityError::ThresholdRequired`] for a binary measure without
///   `thresh`
/// - [`SimilarityError::ThresholdNotSupported`] for a continuous measure with
///   `thresh`
pub fn image_similarity(
    img1: &[f64],
    img2: &[f64],
    mask: Option<&[u8]>,
    thresh: Option<f64>,
    kind: SimilarityKind,
) -> Result<f64, SimilarityError> {
    check_pair(img1.len(), img2.len())?;
    if let Some(m) = mask {
        check_pair(img1.len(), m.len())?;
    }

    let (v1, v2): (Vec<f64>, Vec<f64>) = match mask {
        Some(m) => img1
            .iter()
            .zip(img2.iter())
            .zip(m.iter())
            .filter(|&(_, &keep)| keep == 1)
            .map(|((&a, &b), _)| (a, b))
            .unzip(),
        None => (img1.to_vec(), img2.to_vec()),
    };
    if v1.is_empty() {
        return Err(InputError::EmptyVector.into());
    }

    tracing::debug!(?kind, voxels = v1.len(), "computing image similarity");

    match kind {
        SimilarityKind::Dice | SimilarityKind::Jaccard | SimilarityKind::Tetrachoric => {
            let t = thresh.ok_or(SimilarityError::ThresholdRequired { kind })?;
            let b1 = binarize(&v1, t);
            let b2 = binarize(&v2, t);
            let value = match kind {
                SimilarityKind::Jaccard => jaccard_coefficient(&b1, &b2)?,
                SimilarityKind::Tetrachoric => tetrachoric_corr(&b1, &b2)?,
                _ => dice_coefficient(&b1, &b2)?,
            };
            Ok(value)
        }
        SimilarityKind::Pearson | SimilarityKind::Spearman => {
            if thresh.is_some() {
                return Err(SimilarityError::ThresholdNotSupported { kind });
            }
            let value = match kind {
                SimilarityKind::Spearman => spearman_rho(&v1, &v2)?,
                _ => pearson_r(&v1, &v2)?,
            };
            Ok(value)
        }
    }
}

/// Code a voxel 1 iff its intensity is strictly greater than the threshold.
fn binarize(v: &[f64], thresh: f64) -> Vec<u8> {
    v.iter().map(|&x| u8::from(x > thresh)).collect()
}
