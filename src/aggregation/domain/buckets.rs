//! Status buckets for grouped list views.

use crate::records::domain::{ClosedEnum, Record};
use serde::Serialize;
use std::collections::BTreeMap;

/// Records grouped by status.
///
/// Every status of `R` has a bucket, possibly empty, so callers can render a
/// per-bucket empty state. Records keep their input order within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "R: Serialize"))]
#[serde(transparent)]
pub struct StatusBuckets<R: Record> {
    buckets: BTreeMap<R::Status, Vec<R>>,
}

impl<R: Record> StatusBuckets<R> {
    /// Creates one empty bucket per status.
    #[must_use]
    pub fn empty() -> Self {
        let buckets = <R::Status as ClosedEnum>::VARIANTS
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        Self { buckets }
    }

    pub(crate) fn push(&mut self, record: R) {
        self.buckets.entry(record.status()).or_default().push(record);
    }

    /// Returns the records with the given status.
    #[must_use]
    pub fn get(&self, status: R::Status) -> &[R] {
        self.buckets
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates buckets in status declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (R::Status, &[R])> {
        self.buckets
            .iter()
            .map(|(status, records)| (*status, records.as_slice()))
    }

    /// Returns the number of records across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns `true` when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Consumes the buckets into a map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<R::Status, Vec<R>> {
        self.buckets
    }
}

impl<R: Record> Default for StatusBuckets<R> {
    fn default() -> Self {
        Self::empty()
    }
}
