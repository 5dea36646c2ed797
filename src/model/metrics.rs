//! Per-class metrics, confusion matrix, and error breakdown types

use serde::{Deserialize, Serialize};

/// Precomputed metrics for a single class of the binary task
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Precision in [0, 1]
    pub precision: f64,
    /// Recall in [0, 1]
    pub recall: f64,
    /// F1 score in [0, 1]
    pub f1: f64,
    /// Count of ground-truth instances of this class
    pub support: u64,
}

/// Binary confusion matrix with mednarr as the positive class
///
/// Invariants: `tp + fn_ == mednarr support`, `fp + tn == non-mednarr support`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Mednarr predicted as mednarr
    pub tp: u64,
    /// Mednarr predicted as non-mednarr
    #[serde(rename = "fn")]
    pub fn_: u64,
    /// Non-mednarr predicted as mednarr
    pub fp: u64,
    /// Non-mednarr predicted as non-mednarr
    pub tn: u64,
}

impl ConfusionMatrix {
    /// Total number of samples covered by the matrix
    pub fn total(&self) -> u64 {
        self.tp + self.fn_ + self.fp + self.tn
    }

    /// Correctly classified samples
    pub fn correct(&self) -> u64 {
        self.tp + self.tn
    }

    /// Misclassified samples
    pub fn errors(&self) -> u64 {
        self.fp + self.fn_
    }
}

/// Directional error counts, a redundant view over the confusion matrix
///
/// `mednarr_to_non_mednarr` must equal `fn_` and `non_mednarr_to_mednarr`
/// must equal `fp` of the matrix it accompanies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBreakdown {
    /// Mednarr instances predicted as non-mednarr (false negatives)
    pub mednarr_to_non_mednarr: u64,
    /// Non-mednarr instances predicted as mednarr (false positives)
    pub non_mednarr_to_mednarr: u64,
}

impl ErrorBreakdown {
    /// Check agreement with the accompanying confusion matrix
    pub fn is_consistent_with(&self, matrix: &ConfusionMatrix) -> bool {
        self.mednarr_to_non_mednarr == matrix.fn_ && self.non_mednarr_to_mednarr == matrix.fp
    }
}
