//! The false-positive winner rule

use serde::{Deserialize, Serialize};

use crate::model::DatasetRecord;

/// Outcome of comparing two models on a dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// The model with the given key wins
    Model(String),
    /// Both models have the same false-positive count
    Tie,
}

impl Winner {
    /// The winning model key, if the outcome is not a tie
    pub fn model_key(&self) -> Option<&str> {
        match self {
            Winner::Model(key) => Some(key),
            Winner::Tie => None,
        }
    }
}

/// Pick a winner by minority-class false positives
///
/// Compares `errors.non_mednarr_to_mednarr` between the two models: the
/// lower count wins, equal counts tie. Misclassifying abundant non-mednarr
/// documents as mednarr is the costlier error in this domain, so the rule is
/// deliberately NOT "higher accuracy wins" — a model can lose here while
/// having the better accuracy.
///
/// Returns `None` when either model has no result on the record; absence is
/// a valid state, never an error.
pub fn select_winner(record: &DatasetRecord, model_a: &str, model_b: &str) -> Option<Winner> {
    let (fp_a, fp_b) = false_positive_counts(record, model_a, model_b)?;

    if fp_a < fp_b {
        Some(Winner::Model(model_a.to_string()))
    } else if fp_b < fp_a {
        Some(Winner::Model(model_b.to_string()))
    } else {
        Some(Winner::Tie)
    }
}

/// False-positive counts for two models on a dataset, in argument order
///
/// Returns `None` when either model has no result on the record.
pub fn false_positive_counts(
    record: &DatasetRecord,
    model_a: &str,
    model_b: &str,
) -> Option<(u64, u64)> {
    let a = record.model(model_a)?;
    let b = record.model(model_b)?;
    Some((
        a.errors.non_mednarr_to_mednarr,
        b.errors.non_mednarr_to_mednarr,
    ))
}
