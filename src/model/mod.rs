//! Data model for precomputed classification evaluation results
//!
//! Provides:
//! - Per-class metrics (precision, recall, F1, support)
//! - Binary confusion matrix and the redundant error breakdown view
//! - Per-model evaluation results with consistency validation
//! - Dataset records mapping model keys to optional results

mod dataset;
mod metrics;
mod result;

#[cfg(test)]
mod tests;

pub use dataset::{ClassDistribution, DatasetRecord};
pub use metrics::{ClassMetrics, ConfusionMatrix, ErrorBreakdown};
pub use result::{ModelResult, PerClassMetrics};
