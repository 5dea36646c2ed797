//! Chart-ready projections over a dataset record
//!
//! Pure functions deriving display series from precomputed results:
//! - Tabular metric comparison with two-decimal percentage strings
//! - Radar series with raw numeric percentages
//! - Error-type comparison series
//! - Signed metric deltas between two models
//!
//! Every projection iterates the models present on the record in insertion
//! order; absent models are omitted, never defaulted.

mod format;
mod project;
mod series;


pub use format::{format_percent, format_signed_percent};
pub use project::{
    project_error_series, project_metric_deltas, project_metrics_table, project_radar_series,
};
pub use series::{ErrorPoint, MetricDelta, RadarPoint, TableRow};
