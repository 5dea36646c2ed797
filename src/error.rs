//! Error types for dashboard core operations

use thiserror::Error;

/// Result type for dashboard core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when looking up or wiring dashboard data
///
/// A missing model result inside a dataset is deliberately NOT represented
/// here: model absence is a valid state that projections and the winner
/// selector handle by omission, not by failing.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested dataset key is not in the repository
    #[error("Dataset not found: {key}")]
    DatasetNotFound { key: String },

    /// Dashboard constructed over a repository with no datasets
    #[error("Repository contains no datasets")]
    EmptyRepository,
}
