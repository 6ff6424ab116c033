//! Error types for intraclass correlation computation.

use thiserror::Error;

use crate::error::InputError;

/// Errors from ICC computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IccError {
    /// Precondition violation on the input volumes or the mask.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Fewer than two subjects in the ratings.
    #[error("ICC requires at least 2 subjects, got {actual}")]
    NotEnoughSubjects {
        /// Number of subjects provided
        actual: usize,
    },

    /// Fewer than two sessions in the ratings.
    #[error("ICC requires at least 2 sessions, got {actual}")]
    NotEnoughSessions {
        /// Number of sessions provided
        actual: usize,
    },

    /// Subjects were rated in different numbers of sessions.
    #[error("unbalanced ratings: expected {expected} sessions per subject, got {actual}")]
    UnbalancedRatings {
        /// Sessions in the first subject's row
        expected: usize,
        /// Sessions in the offending row
        actual: usize,
    },

    /// Sessions disagree on the subject roster size.
    #[error("sessions must list the same subjects: expected {expected}, got {actual}")]
    SubjectCountMismatch {
        /// Subjects in the first session
        expected: usize,
        /// Subjects in the offending session
        actual: usize,
    },
}
