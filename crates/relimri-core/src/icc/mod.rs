//! Intraclass correlation over balanced subject x session ratings.
//!
//! Implements the sum-of-squares ANOVA decomposition behind ICC(1), ICC(2,1)
//! and ICC(3,1) (Shrout & Fleiss single-rater forms) for a balanced layout of
//! `n >= 2` subjects measured in `k >= 2` sessions, plus [`voxelwise_icc`],
//! a driver that runs the chosen estimate per voxel across flattened volumes.
//!
//! # Decomposition
//!
//! With grand mean `m`, subject means `m_i` and session means `m_j`:
//!
//! ```text
//! SST  = sum (x_ij - m)^2          total
//! SSBS = k * sum (m_i - m)^2       between subjects
//! SSC  = n * sum (m_j - m)^2       between sessions
//! SSE  = SST - SSBS - SSC          residual
//! SSW  = SST - SSBS                within subjects
//! ```
//!
//! Mean squares divide by the usual degrees of freedom; the three estimates
//! combine them per [`IccKind`]. A layout with no variance at all yields NaN
//! (0/0), the same indeterminate-result convention as the other measures.

mod error;


pub use error::IccError;

use serde::{Deserialize, Serialize};

use crate::error::check_pair;

/// ICC form selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IccKind {
    /// ICC(1): one-way random effects.
    #[serde(rename = "icc_1")]
    Icc1,
    /// ICC(2,1): two-way random effects, absolute agreement.
    #[serde(rename = "icc_2")]
    Icc2,
    /// ICC(3,1): two-way mixed effects, consistency.
    #[serde(rename = "icc_3")]
    Icc3,
}

/// An ICC point estimate together with the ANOVA mean squares behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IccEstimate {
    /// The ICC point estimate (NaN when the layout carries no variance).
    pub estimate: f64,
    /// MSR: mean square between subjects.
    pub ms_between_subjects: f64,
    /// MSC: mean square between sessions.
    pub ms_between_sessions: f64,
    /// MSE: residual mean square.
    pub ms_error: f64,
    /// MSW: mean square within subjects.
    pub ms_within: f64,
}

/// ICC over a balanced ratings matrix, rows = subjects, columns = sessions.
///
/// # Errors
/// - [`IccError::NotEnoughSubjects`] / [`IccError::NotEnoughSessions`] when
///   either dimension is below 2
/// - [`IccError::UnbalancedRatings`] when rows differ in length
pub fn sumsq_icc(ratings: &[Vec<f64>], kind: IccKind) -> Result<IccEstimate, IccError> {
    let n = ratings.len();
    if n < 2 {
        return Err(IccError::NotEnoughSubjects { actual: n });
    }
    let k = ratings[0].len();
    for row in ratings {
        if row.len() != k {
            return Err(IccError::UnbalancedRatings {
                expected: k,
                actual: row.len(),
            });
        }
    }
    if k < 2 {
        return Err(IccError::NotEnoughSessions { actual: k });
    }

    let nf = n as f64;
    let kf = k as f64;
    let grand = ratings.iter().flatten().sum::<f64>() / (nf * kf);

    let ss_total = ratings
        .iter()
        .flatten()
        .map(|&x| (x - grand).powi(2))
        .sum::<f64>();

    let ss_subjects = kf
        * ratings
            .iter()
            .map(|row| (row.iter().sum::<f64>() / kf - grand).powi(2))
            .sum::<f64>();

    let ss_sessions = nf
        * (0..k)
            .map(|j| {
                let mean = ratings.iter().map(|row| row[j]).sum::<f64>() / nf;
                (mean - grand).powi(2)
            })
            .sum::<f64>();

    let ss_error = ss_total - ss_subjects - ss_sessions;
    let ss_within = ss_total - ss_subjects;

    let msr = ss_subjects / (nf - 1.0);
    let msc = ss_sessions / (kf - 1.0);
    let mse = ss_error / ((nf - 1.0) * (kf - 1.0));
    let msw = ss_within / (nf * (kf - 1.0));

    let estimate = match kind {
        IccKind::Icc1 => (msr - msw) / (msr + (kf - 1.0) * msw),
        IccKind::Icc2 => (msr - mse) / (msr + (kf - 1.0) * mse + kf * (msc - mse) / nf),
        IccKind::Icc3 => (msr - mse) / (msr + (kf - 1.0) * mse),
    };

    Ok(IccEstimate {
        estimate,
        ms_between_subjects: msr,
        ms_between_sessions: msc,
        ms_error: mse,
        ms_within: msw,
    })
}

/// Voxelwise ICC across flattened volumes.
///
/// `sessions[s][p]` is subject `p`'s volume in session `s`; every session must
/// list the same subjects in the same order, and all volumes (and the mask,
/// when given) must have equal length. Returns one estimate per voxel, NaN at
/// voxels the mask drops.
///
/// # Errors
/// - [`IccError::SubjectCountMismatch`] when sessions disagree on the subject
///   roster size
/// - [`IccError::NotEnoughSubjects`] / [`IccError::NotEnoughSessions`] when
///   either dimension is below 2
/// - [`IccError::Input`] on empty or length-mismatched volumes or mask
pub fn voxelwise_icc(
    sessions: &[Vec<&[f64]>],
    mask: Option<&[u8]>,
    kind: IccKind,
) -> Result<Vec<f64>, IccError> {
    if sessions.len() < 2 {
        return Err(IccError::NotEnoughSessions {
            actual: sessions.len(),
        });
    }
    let subjects = sessions[0].len();
    for session in sessions {
        if session.len() != subjects {
            return Err(IccError::SubjectCountMismatch {
                expected: subjects,
                actual: session.len(),
            });
        }
    }
    if subjects < 2 {
        return Err(IccError::NotEnoughSubjects { actual: subjects });
    }

    let voxels = sessions[0][0].len();
    for session in sessions {
        for volume in session {
            check_pair(voxels, volume.len())?;
        }
    }
    if let Some(m) = mask {
        check_pair(voxels, m.len())?;
    }

    tracing::debug!(
        ?kind,
        sessions = sessions.len(),
        subjects,
        voxels,
        "computing voxelwise ICC"
    );

    let mut out = vec![f64::NAN; voxels];
    let mut ratings = vec![vec![0.0; sessions.len()]; subjects];
    for v in 0..voxels {
        if mask.map_or(false, |m| m[v] != 1) {
            continue;
        }
        for (j, session) in sessions.iter().enumerate() {
            for (i, volume) in session.iter().enumerate() {
                ratings[i][j] = volume[v];
            }
        }
        out[v] = sumsq_icc(&ratings, kind)?.estimate;
    }
    Ok(out)
}
