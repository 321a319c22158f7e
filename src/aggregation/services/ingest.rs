//! Ingestion of wire rows into validated record snapshots.

use super::EntityListAggregator;
use crate::{
    aggregation::domain::{AggregationError, AggregationResult, StatusBuckets},
    records::{domain::RecordStateError, ports::FromRow},
};

/// Outcome of a lenient ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport<R> {
    /// Rows that converted cleanly, in input order.
    pub accepted: Vec<R>,
    /// One error per rejected row, in input order.
    pub rejected: Vec<RecordStateError>,
}

impl<R> IngestReport<R> {
    /// Returns `true` when no row was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl EntityListAggregator {
    /// Converts rows into records, setting aside rows with out-of-domain
    /// values.
    ///
    /// Rejected rows are excluded from the snapshot until corrected at the
    /// source; each rejection is reported.
    #[must_use]
    pub fn ingest<R: FromRow>(&self, rows: impl IntoIterator<Item = R::Row>) -> IngestReport<R> {
        let outcomes: Vec<Result<R, RecordStateError>> =
            rows.into_iter().map(R::from_row).collect();
        let rejected: Vec<RecordStateError> = outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().err().cloned())
            .collect();
        for err in &rejected {
            tracing::warn!(
                kind = %R::KIND,
                record = %err.record_id,
                field = err.field,
                value = %err.value,
                "rejected record with invalid state"
            );
        }
        IngestReport {
            accepted: outcomes.into_iter().filter_map(Result::ok).collect(),
            rejected,
        }
    }

    /// Converts rows into records, failing on the first invalid row.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidRecordState`] for the first row
    /// holding an out-of-domain value.
    pub fn ingest_strict<R: FromRow>(
        &self,
        rows: impl IntoIterator<Item = R::Row>,
    ) -> AggregationResult<Vec<R>> {
        rows.into_iter()
            .map(|row| R::from_row(row).map_err(AggregationError::from))
            .collect()
    }

    /// Ingests rows strictly and groups them by status.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidRecordState`] instead of placing a
    /// row with an unknown status in any bucket.
    pub fn group_rows_by_status<R: FromRow>(
        &self,
        rows: impl IntoIterator<Item = R::Row>,
    ) -> AggregationResult<StatusBuckets<R>> {
        let records = self.ingest_strict::<R>(rows)?;
        Ok(self.group_by_status(&records))
    }
}
