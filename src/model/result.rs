//! Per-model evaluation results

use serde::{Deserialize, Serialize};

use super::metrics::{ClassMetrics, ConfusionMatrix, ErrorBreakdown};

/// Metrics for both classes of the binary task
///
/// The two class labels are fixed fields rather than a string map so that
/// presence of both is enforced at the type level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerClassMetrics {
    /// Metrics for the mednarr (positive, minority by convention) class
    pub mednarr: ClassMetrics,
    /// Metrics for the non-mednarr (negative) class
    pub non_mednarr: ClassMetrics,
}

/// Precomputed evaluation result for one model on one dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    /// Human-readable model name (e.g. "DistilBERT-uncased")
    pub name: String,
    /// Overall accuracy in [0, 1]
    pub accuracy: f64,
    /// Correctly classified samples
    pub matches: u64,
    /// Misclassified samples
    pub mismatches: u64,
    /// Per-class precision/recall/F1/support
    pub classes: PerClassMetrics,
    /// Binary confusion matrix
    pub confusion_matrix: ConfusionMatrix,
    /// Directional error counts, redundant with the matrix
    pub errors: ErrorBreakdown,
}

impl ModelResult {
    /// Check the internal consistency identities of this result
    ///
    /// - `matches == tp + tn` and `mismatches == fp + fn`
    /// - `errors` agrees with the confusion matrix
    /// - `tp + fn == mednarr support` and `fp + tn == non-mednarr support`
    pub fn validate(&self, total_samples: u64) -> bool {
        let cm = &self.confusion_matrix;
        self.matches + self.mismatches == total_samples
            && self.matches == cm.correct()
            && self.mismatches == cm.errors()
            && self.errors.is_consistent_with(cm)
            && cm.tp + cm.fn_ == self.classes.mednarr.support
            && cm.fp + cm.tn == self.classes.non_mednarr.support
    }
}
