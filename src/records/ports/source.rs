//! Data source port supplying record snapshots and accepting writes.

use crate::records::domain::{Record, RecordId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record source operations.
pub type RecordSourceResult<T> = Result<T, RecordSourceError>;

/// Shared store of one record type.
///
/// Presentation code reads snapshots through this port and hands them to the
/// aggregator; the aggregator never calls it.
#[async_trait]
pub trait RecordSource<R: Record>: Send + Sync {
    /// Returns every record in source order.
    async fn records(&self) -> RecordSourceResult<Vec<R>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: &RecordId) -> RecordSourceResult<Option<R>>;

    /// Inserts a new record or replaces the stored record with the same id.
    ///
    /// Replacements keep the record's original position.
    async fn persist(&self, record: &R) -> RecordSourceResult<R>;

    /// Overwrites the status of a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordSourceError::NotFound`] when the record does not exist.
    async fn update_status(&self, id: &RecordId, status: R::Status) -> RecordSourceResult<R>;

    /// Deletes a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordSourceError::NotFound`] when the record does not exist.
    async fn remove(&self, id: &RecordId) -> RecordSourceResult<()>;
}

/// Errors returned by record source implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordSourceError {
    /// The record was not found.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordSourceError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
