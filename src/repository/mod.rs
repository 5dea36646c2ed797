//! Read-only, in-memory dataset repository
//!
//! Datasets are constructed once at startup and injected wherever needed,
//! so tests can swap the baked-in fixtures for their own records.

mod fixtures;
mod store;

#[cfg(test)]
mod tests;

pub use fixtures::ocr_form_comparison;
pub use store::DatasetRepository;
