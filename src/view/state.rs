//! Selection state and the dashboard controller

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::repository::DatasetRepository;

use super::viewmodel::{build_view_model, ViewModel};

/// The selectable display modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Key findings and the performance radar
    Overview,
    /// Metric comparison chart and detail table
    Metrics,
    /// Error analysis chart and per-model breakdowns
    Errors,
    /// Per-model confusion matrices
    Confusion,
}

impl View {
    /// All views in navigation order
    pub const ALL: [View; 4] = [View::Overview, View::Metrics, View::Errors, View::Confusion];

    /// Display label for the navigation row
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Metrics => "Metrics",
            View::Errors => "Errors",
            View::Confusion => "Confusion",
        }
    }
}

/// Current selection state of the dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Key of the dataset being displayed
    pub selected_dataset: String,
    /// Active display mode
    pub selected_view: View,
    /// Whether the recommendations panel is shown
    pub show_recommendations: bool,
}

impl ViewState {
    /// Initial state: first dataset, overview, recommendations hidden
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyRepository` when the repository has no datasets.
    pub fn initial(repo: &DatasetRepository) -> Result<Self> {
        let first = repo.keys().first().ok_or(Error::EmptyRepository)?;
        Ok(Self {
            selected_dataset: first.clone(),
            selected_view: View::Overview,
            show_recommendations: false,
        })
    }
}

/// Render boundary: the collaborator that paints view models
///
/// The core only ever hands the sink an immutable view model; the sink owns
/// all painting and raises the next selection event back into the
/// controller.
pub trait RenderSink {
    /// Paint the given view model
    fn render(&mut self, model: &ViewModel);
}

impl<F: FnMut(&ViewModel)> RenderSink for F {
    fn render(&mut self, model: &ViewModel) {
        self(model)
    }
}

/// Dashboard controller owning the repository, selection state, and sink
///
/// Every mutator is synchronous and total: it updates the state, rebuilds
/// the view model, and notifies the sink before returning. Feeding an
/// unknown dataset key to `select_dataset` is a programming error and
/// panics; the recoverable lookup path is `DatasetRepository::get`.
#[derive(Debug)]
pub struct Dashboard<S: RenderSink> {
    repo: DatasetRepository,
    state: ViewState,
    sink: S,
}

impl<S: RenderSink> Dashboard<S> {
    /// Create a dashboard over an injected repository
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyRepository` when the repository has no datasets.
    pub fn new(repo: DatasetRepository, sink: S) -> Result<Self> {
        let state = ViewState::initial(&repo)?;
        Ok(Self { repo, state, sink })
    }

    /// Current selection state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The injected repository
    pub fn repository(&self) -> &DatasetRepository {
        &self.repo
    }

    /// Build the view model for the current state
    ///
    /// # Errors
    ///
    /// Only fails if the selected dataset key is unknown, which the mutators
    /// rule out.
    pub fn view_model(&self) -> Result<ViewModel> {
        build_view_model(&self.repo, &self.state)
    }

    /// Push the current view model to the sink (e.g. for the initial paint)
    pub fn render(&mut self) {
        self.notify();
    }

    /// Switch the displayed dataset
    ///
    /// # Panics
    ///
    /// Panics on an unknown dataset key; callers select from `keys()`.
    pub fn select_dataset(&mut self, key: &str) {
        assert!(
            self.repo.keys().iter().any(|k| k == key),
            "unknown dataset key: {key}"
        );
        self.state.selected_dataset = key.to_string();
        self.notify();
    }

    /// Switch the active display mode
    pub fn select_view(&mut self, view: View) {
        self.state.selected_view = view;
        self.notify();
    }

    /// Flip the recommendations panel on or off
    pub fn toggle_recommendations(&mut self) {
        self.state.show_recommendations = !self.state.show_recommendations;
        self.notify();
    }

    fn notify(&mut self) {
        // The selected key is validated at construction and in select_dataset
        if let Ok(model) = build_view_model(&self.repo, &self.state) {
            self.sink.render(&model);
        }
    }
}
