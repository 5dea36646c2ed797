//! # comparar
//!
//! Core logic for a classification model comparison dashboard.
//!
//! The crate holds precomputed evaluation results for a binary text
//! classification task (mednarr vs non-mednarr form types) and derives
//! everything a renderer needs to paint the comparison:
//!
//! - `model`: the evaluation data model (per-class metrics, confusion
//!   matrices, error breakdowns, dataset records)
//! - `repository`: the injected, read-only dataset store plus the baked-in
//!   fixtures
//! - `projector`: pure chart-ready projections (metric table, radar series,
//!   error series, metric deltas)
//! - `compare`: the false-positive winner rule
//! - `view`: selection state, the render boundary, and the
//!   state-to-viewmodel mapping
//!
//! There is no I/O anywhere: data is constructed once at startup, every
//! function is a pure, terminating computation, and all mutations are
//! synchronous responses to discrete selection events.
//!
//! # Example
//!
//! ```
//! use comparar::repository::ocr_form_comparison;
//! use comparar::view::{Dashboard, View, ViewModel};
//!
//! let sink = |model: &ViewModel| {
//!     println!("{} ({})", model.header.name, model.header.samples_label);
//! };
//! let mut dashboard = Dashboard::new(ocr_form_comparison(), sink).unwrap();
//! dashboard.select_view(View::Errors);
//! dashboard.select_dataset("dataset2");
//! ```

pub mod compare;
pub mod error;
pub mod model;
pub mod projector;
pub mod repository;
pub mod view;

pub use compare::{select_winner, Winner};
pub use error::{Error, Result};
pub use model::{
    ClassDistribution, ClassMetrics, ConfusionMatrix, DatasetRecord, ErrorBreakdown, ModelResult,
    PerClassMetrics,
};
pub use projector::{
    project_error_series, project_metric_deltas, project_metrics_table, project_radar_series,
};
pub use repository::{ocr_form_comparison, DatasetRepository};
pub use view::{build_view_model, Dashboard, RenderSink, View, ViewModel, ViewState};
