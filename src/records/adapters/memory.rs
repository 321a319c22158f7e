//! In-memory record source for tests and local snapshots.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::records::{
    domain::{Record, RecordId},
    ports::{RecordSource, RecordSourceError, RecordSourceResult},
};

/// Thread-safe in-memory record source preserving insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRecordSource<R: Record> {
    state: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> InMemoryRecordSource<R> {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Creates a source holding the given records in order.
    #[must_use]
    pub fn seeded(records: Vec<R>) -> Self {
        Self {
            state: Arc::new(RwLock::new(records)),
        }
    }
}

impl<R: Record> Default for InMemoryRecordSource<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(err: impl std::fmt::Display) -> RecordSourceError {
    RecordSourceError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<R: Record> RecordSource<R> for InMemoryRecordSource<R> {
    async fn records(&self) -> RecordSourceResult<Vec<R>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.clone())
    }

    async fn find_by_id(&self, id: &RecordId) -> RecordSourceResult<Option<R>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.iter().find(|record| record.id() == id).cloned())
    }

    async fn persist(&self, record: &R) -> RecordSourceResult<R> {
        let mut state = self.state.write().map_err(poisoned)?;
        let existing = state.iter().position(|stored| stored.id() == record.id());
        match existing.and_then(|position| state.get_mut(position)) {
            Some(stored) => *stored = record.clone(),
            None => state.push(record.clone()),
        }
        Ok(record.clone())
    }

    async fn update_status(&self, id: &RecordId, status: R::Status) -> RecordSourceResult<R> {
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| RecordSourceError::NotFound(id.clone()))?;
        stored.set_status(status);
        Ok(stored.clone())
    }

    async fn remove(&self, id: &RecordId) -> RecordSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let position = state
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| RecordSourceError::NotFound(id.clone()))?;
        state.remove(position);
        Ok(())
    }
}
