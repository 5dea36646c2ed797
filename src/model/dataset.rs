//! Dataset records holding ground truth and per-model results

use serde::{Deserialize, Serialize};

use super::result::ModelResult;

/// Ground-truth class distribution of a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDistribution {
    /// Ground-truth mednarr instances
    pub mednarr: u64,
    /// Ground-truth non-mednarr instances
    pub non_mednarr: u64,
}

impl ClassDistribution {
    /// Total instances across both classes
    pub fn total(&self) -> u64 {
        self.mednarr + self.non_mednarr
    }
}

/// One evaluated dataset with results for zero or more models
///
/// Model results are keyed by a short model key (e.g. "distilbert") and kept
/// in insertion order. A key being absent is a valid state, not an error:
/// every consumer handles absence by omission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Human-readable dataset name
    pub name: String,
    /// Total evaluated samples
    pub total_samples: u64,
    /// Ground-truth class distribution, sums to `total_samples`
    pub class_distribution: ClassDistribution,
    /// Model results in insertion order
    models: Vec<(String, ModelResult)>,
}

impl DatasetRecord {
    /// Create a record with no model results yet
    pub fn new(
        name: impl Into<String>,
        total_samples: u64,
        class_distribution: ClassDistribution,
    ) -> Self {
        Self {
            name: name.into(),
            total_samples,
            class_distribution,
            models: Vec::new(),
        }
    }

    /// Attach a model result under the given key (builder style)
    pub fn with_model(mut self, key: impl Into<String>, result: ModelResult) -> Self {
        self.models.push((key.into(), result));
        self
    }

    /// Look up a model result by key
    pub fn model(&self, key: &str) -> Option<&ModelResult> {
        self.models.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    /// Whether a result exists for the given model key
    pub fn has_model(&self, key: &str) -> bool {
        self.model(key).is_some()
    }

    /// Present model keys in insertion order
    pub fn model_keys(&self) -> Vec<&str> {
        self.models.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Iterate (key, result) pairs in insertion order
    pub fn models(&self) -> impl Iterator<Item = (&str, &ModelResult)> {
        self.models.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Number of models with results on this dataset
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Check every attached result against the dataset totals
    pub fn validate(&self) -> bool {
        self.class_distribution.total() == self.total_samples
            && self.models.iter().all(|(_, r)| r.validate(self.total_samples))
    }
}
