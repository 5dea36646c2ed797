//! Pure state-to-viewmodel mapping

use serde::{Deserialize, Serialize};

use crate::compare::{false_positive_counts, select_winner, Winner};
use crate::error::Result;
use crate::model::{ClassDistribution, ConfusionMatrix, DatasetRecord};
use crate::projector::{
    project_error_series, project_metric_deltas, project_metrics_table, project_radar_series,
    ErrorPoint, MetricDelta, RadarPoint, TableRow,
};
use crate::repository::DatasetRepository;

use super::state::{View, ViewState};

/// Header summary for the displayed dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Dataset name
    pub name: String,
    /// Total evaluated samples
    pub total_samples: u64,
    /// Thousands-separated label (e.g. "9,990 samples")
    pub samples_label: String,
    /// Ground-truth class distribution
    pub class_distribution: ClassDistribution,
}

/// Winner panel data for the overview's key findings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerSummary {
    /// Outcome of the false-positive comparison
    pub winner: Winner,
    /// (model key, false positives) for the two compared models
    pub false_positives: Vec<(String, u64)>,
}

/// Per-model error breakdown panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPanel {
    /// Model key
    pub model_key: String,
    /// Human-readable model name
    pub model_name: String,
    /// Non-mednarr predicted as mednarr
    pub false_positives: u64,
    /// Mednarr predicted as non-mednarr
    pub false_negatives: u64,
    /// Total misclassified samples
    pub total_errors: u64,
}

/// Per-model confusion matrix panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionPanel {
    /// Model key
    pub model_key: String,
    /// Human-readable model name
    pub model_name: String,
    /// The matrix to paint
    pub matrix: ConfusionMatrix,
}

/// Payload of the active display mode
///
/// Only the selected view's data is carried, mirroring the conditional
/// rendering of the dashboard sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Section {
    /// Key findings and performance radar
    Overview {
        /// Winner panel, present when at least two models have results
        winner: Option<WinnerSummary>,
        /// Radar series
        radar: Vec<RadarPoint>,
    },
    /// Metric comparison chart and detail table
    Metrics {
        /// Table rows with formatted percentages
        table: Vec<TableRow>,
        /// Difference column, present when at least two models have results
        deltas: Option<Vec<MetricDelta>>,
    },
    /// Error analysis chart and per-model breakdowns
    Errors {
        /// Error-type series
        series: Vec<ErrorPoint>,
        /// One breakdown panel per present model
        panels: Vec<ErrorPanel>,
    },
    /// Per-model confusion matrices
    Confusion {
        /// One matrix panel per present model
        matrices: Vec<ConfusionPanel>,
    },
}

/// Immutable display data handed across the render boundary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Header summary of the displayed dataset
    pub header: DatasetSummary,
    /// All dataset keys for the navigation row, in repository order
    pub dataset_keys: Vec<String>,
    /// Key of the displayed dataset
    pub selected_dataset: String,
    /// Active display mode
    pub selected_view: View,
    /// Payload of the active display mode
    pub section: Section,
    /// Whether the recommendations panel is shown
    pub show_recommendations: bool,
}

/// Map selection state to the view model for the renderer
///
/// Pure and synchronous. Pairwise data (winner panel, metric deltas) is
/// computed over the first two models present on the record, in record
/// order, and omitted when fewer than two models have results.
///
/// # Errors
///
/// Returns `Error::DatasetNotFound` when the state's selected key is not in
/// the repository.
pub fn build_view_model(repo: &DatasetRepository, state: &ViewState) -> Result<ViewModel> {
    let record = repo.get(&state.selected_dataset)?;

    let section = match state.selected_view {
        View::Overview => Section::Overview {
            winner: winner_summary(record),
            radar: project_radar_series(record),
        },
        View::Metrics => Section::Metrics {
            table: project_metrics_table(record),
            deltas: leading_pair(record)
                .and_then(|(a, b)| project_metric_deltas(record, &a, &b)),
        },
        View::Errors => Section::Errors {
            series: project_error_series(record),
            panels: error_panels(record),
        },
        View::Confusion => Section::Confusion {
            matrices: confusion_panels(record),
        },
    };

    Ok(ViewModel {
        header: DatasetSummary {
            name: record.name.clone(),
            total_samples: record.total_samples,
            samples_label: format!("{} samples", group_thousands(record.total_samples)),
            class_distribution: record.class_distribution,
        },
        dataset_keys: repo.keys().to_vec(),
        selected_dataset: state.selected_dataset.clone(),
        selected_view: state.selected_view,
        section,
        show_recommendations: state.show_recommendations,
    })
}

/// First two model keys present on the record, in record order
fn leading_pair(record: &DatasetRecord) -> Option<(String, String)> {
    let keys = record.model_keys();
    match keys.as_slice() {
        [a, b, ..] => Some(((*a).to_string(), (*b).to_string())),
        _ => None,
    }
}

fn winner_summary(record: &DatasetRecord) -> Option<WinnerSummary> {
    let (a, b) = leading_pair(record)?;
    let winner = select_winner(record, &a, &b)?;
    let (fp_a, fp_b) = false_positive_counts(record, &a, &b)?;
    Some(WinnerSummary {
        winner,
        false_positives: vec![(a, fp_a), (b, fp_b)],
    })
}

fn error_panels(record: &DatasetRecord) -> Vec<ErrorPanel> {
    record
        .models()
        .map(|(key, result)| ErrorPanel {
            model_key: key.to_string(),
            model_name: result.name.clone(),
            false_positives: result.errors.non_mednarr_to_mednarr,
            false_negatives: result.errors.mednarr_to_non_mednarr,
            total_errors: result.mismatches,
        })
        .collect()
}

fn confusion_panels(record: &DatasetRecord) -> Vec<ConfusionPanel> {
    record
        .models()
        .map(|(key, result)| ConfusionPanel {
            model_key: key.to_string(),
            model_name: result.name.clone(),
            matrix: result.confusion_matrix,
        })
        .collect()
}

/// Insert comma separators every three digits ("9990" -> "9,990")
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
