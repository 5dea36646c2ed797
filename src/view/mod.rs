//! View state and the render boundary
//!
//! Holds the dashboard's selection state (dataset, view, recommendations
//! toggle), maps it to an immutable [`ViewModel`], and notifies a
//! [`RenderSink`] collaborator after every mutation. Painting is entirely
//! the renderer's concern; nothing here touches a display.

mod state;
mod viewmodel;


pub use state::{Dashboard, RenderSink, View, ViewState};
pub use viewmodel::{
    build_view_model, ConfusionPanel, DatasetSummary, ErrorPanel, Section, ViewModel,
    WinnerSummary,
};
