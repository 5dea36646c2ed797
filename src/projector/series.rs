//! Display series types emitted across the render boundary

use serde::{Deserialize, Serialize};

/// One row of the tabular metric comparison
///
/// `values` holds (model key, formatted percentage) pairs for every model
/// present on the dataset, in record order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Metric label (e.g. "Mednarr Precision")
    pub metric: String,
    /// Per-model two-decimal percentage strings
    pub values: Vec<(String, String)>,
}

/// One angle of the performance radar
///
/// Values are raw percentages (metric × 100), not strings, since radar
/// rendering needs a numeric scale. Expected in [85, 100] by convention but
/// never clamped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    /// Metric label
    pub metric: String,
    /// Per-model numeric percentages
    pub values: Vec<(String, f64)>,
}

/// One bar group of the error-type comparison
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPoint {
    /// Error type label (e.g. "Non-mednarr to Mednarr")
    pub error_type: String,
    /// Per-model error counts
    pub values: Vec<(String, u64)>,
}

/// Signed percentage-point difference between two models on one metric
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Metric label
    pub metric: String,
    /// Difference in percentage points (first model minus second)
    pub delta: f64,
    /// Two-decimal rendering with explicit sign (e.g. "+0.04")
    pub formatted: String,
}
