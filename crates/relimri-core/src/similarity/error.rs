//! Error types for image similarity computation.

use thiserror::Error;

use crate::error::InputError;

use super::image::SimilarityKind;

/// Errors from the image similarity dispatcher.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimilarityError {
    /// Precondition violation on the input vectors or the mask.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A binary measure was requested without a binarization threshold.
    #[error("similarity measure {kind:?} requires a binarization threshold")]
    ThresholdRequired {
        /// The measure that was requested
        kind: SimilarityKind,
    },

    /// A continuous measure was requested with a threshold, which it ignores.
    #[error("similarity measure {kind:?} does not accept a threshold")]
    ThresholdNotSupported {
        /// The measure that was requested
        kind: SimilarityKind,
    },
}
