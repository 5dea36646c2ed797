//! Projection functions

use crate::model::{DatasetRecord, ModelResult};

use super::format::{format_percent, format_signed_percent};
use super::series::{ErrorPoint, MetricDelta, RadarPoint, TableRow};

/// The four compared metrics, in fixed display order
const METRICS: [(&str, fn(&ModelResult) -> f64); 4] = [
    ("Accuracy", |r| r.accuracy),
    ("Mednarr Precision", |r| r.classes.mednarr.precision),
    ("Mednarr Recall", |r| r.classes.mednarr.recall),
    ("Mednarr F1-Score", |r| r.classes.mednarr.f1),
];

/// The radar chart abbreviates the F1 label
fn radar_label(metric: &str) -> &str {
    if metric == "Mednarr F1-Score" {
        "Mednarr F1"
    } else {
        metric
    }
}

/// Project the tabular metric comparison
///
/// Always four rows (Accuracy, Mednarr Precision, Mednarr Recall, Mednarr
/// F1-Score); each row carries one formatted value per model present on the
/// record. A record with a single model degrades to single-value rows.
pub fn project_metrics_table(record: &DatasetRecord) -> Vec<TableRow> {
    METRICS
        .iter()
        .map(|(metric, extract)| TableRow {
            metric: (*metric).to_string(),
            values: record
                .models()
                .map(|(key, result)| (key.to_string(), format_percent(extract(result))))
                .collect(),
        })
        .collect()
}

/// Project the performance radar series
///
/// Same metrics as the table, but as raw numeric percentages.
pub fn project_radar_series(record: &DatasetRecord) -> Vec<RadarPoint> {
    METRICS
        .iter()
        .map(|(metric, extract)| RadarPoint {
            metric: radar_label(metric).to_string(),
            values: record
                .models()
                .map(|(key, result)| (key.to_string(), extract(result) * 100.0))
                .collect(),
        })
        .collect()
}

/// Project the error-type comparison series
///
/// Two fixed error types: mednarr misread as non-mednarr (false negatives)
/// and non-mednarr misread as mednarr (false positives).
pub fn project_error_series(record: &DatasetRecord) -> Vec<ErrorPoint> {
    let error_types: [(&str, fn(&ModelResult) -> u64); 2] = [
        ("Mednarr to Non-mednarr", |r| r.errors.mednarr_to_non_mednarr),
        ("Non-mednarr to Mednarr", |r| r.errors.non_mednarr_to_mednarr),
    ];

    error_types
        .iter()
        .map(|(error_type, extract)| ErrorPoint {
            error_type: (*error_type).to_string(),
            values: record
                .models()
                .map(|(key, result)| (key.to_string(), extract(result)))
                .collect(),
        })
        .collect()
}

/// Per-metric difference between two models, in percentage points
///
/// Deltas are computed on the two-decimal rounded percentages shown in the
/// table, so the formatted difference always agrees with the displayed
/// values. Returns `None` when either model is absent from the record.
pub fn project_metric_deltas(
    record: &DatasetRecord,
    model_a: &str,
    model_b: &str,
) -> Option<Vec<MetricDelta>> {
    let a = record.model(model_a)?;
    let b = record.model(model_b)?;

    let rounded = |v: f64| (v * 10_000.0).round() / 100.0;

    Some(
        METRICS
            .iter()
            .map(|(metric, extract)| {
                let delta = rounded(extract(a)) - rounded(extract(b));
                MetricDelta {
                    metric: (*metric).to_string(),
                    delta,
                    formatted: format_signed_percent(delta),
                }
            })
            .collect(),
    )
}
