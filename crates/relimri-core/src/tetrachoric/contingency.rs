//! 2x2 contingency table over paired binary observations.

use serde::{Deserialize, Serialize};

/// Cell counts of the 2x2 contingency table for a pair of 0/1-coded vectors.
///
/// Cells follow the conventional A/B/C/D layout: `both_absent` counts (0,0)
/// pairs, `only_second` counts (0,1), `only_first` counts (1,0) and
/// `both_present` counts (1,1). For valid binary input the four cells sum to
/// the vector length; pairs containing a value outside {0, 1} match no cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// A: positions where both vectors are 0.
    pub both_absent: u64,
    /// B: positions where the first vector is 0 and the second is 1.
    pub only_second: u64,
    /// C: positions where the first vector is 1 and the second is 0.
    pub only_first: u64,
    /// D: positions where both vectors are 1.
    pub both_present: u64,
}

impl ContingencyTable {
    /// Classify the paired observations in one linear pass.
    ///
    /// Caller must ensure the vectors have equal length; trailing elements of
    /// the longer vector would be silently dropped by the zip.
    pub fn from_pair(v1: &[u8], v2: &[u8]) -> Self {
        let mut table = Self::default();
        for (&x, &y) in v1.iter().zip(v2.iter()) {
            match (x, y) {
                (0, 0) => table.both_absent += 1,
                (0, 1) => table.only_second += 1,
                (1, 0) => table.only_first += 1,
                (1, 1) => table.both_present += 1,
                _ => {}
            }
        }
        table
    }

    /// Total number of classified pairs.
    pub fn total(&self) -> u64 {
        self.both_absent + self.only_second + self.only_first + self.both_present
    }

    /// Number of discordant pairs (B + C).
    pub fn discordant(&self) -> u64 {
        self.only_second + self.only_first
    }
}
