//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use trail_core::fixture::FixtureError;
use trail_core::model::TopicId;

/// Errors emitted while loading the topic catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("fixture data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Record(#[from] FixtureError),

    #[error("duplicate topic id: {0}")]
    DuplicateId(TopicId),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
