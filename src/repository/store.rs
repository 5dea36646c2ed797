//! The dataset store

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::DatasetRecord;

/// In-memory repository of evaluated datasets
///
/// Keys keep insertion order; records are immutable once inserted. There are
/// no mutation operations beyond builder-style construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DatasetRepository {
    /// Dataset keys in insertion order
    keys: Vec<String>,
    /// Records by key
    records: HashMap<String, DatasetRecord>,
}

impl DatasetRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset under the given key (builder style)
    ///
    /// Inserting an existing key replaces the record and keeps its original
    /// position in the key order.
    pub fn with_dataset(mut self, key: impl Into<String>, record: DatasetRecord) -> Self {
        let key = key.into();
        if !self.records.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.records.insert(key, record);
        self
    }

    /// Look up a dataset by key
    ///
    /// # Errors
    ///
    /// Returns `Error::DatasetNotFound` for an unknown key. Unknown keys are
    /// surfaced to the caller, never silently defaulted.
    pub fn get(&self, key: &str) -> Result<&DatasetRecord> {
        self.records.get(key).ok_or_else(|| Error::DatasetNotFound {
            key: key.to_string(),
        })
    }

    /// Dataset keys in insertion order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of datasets
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the repository holds no datasets
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate (key, record) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DatasetRecord)> {
        self.keys.iter().map(move |k| (k.as_str(), &self.records[k]))
    }
}
