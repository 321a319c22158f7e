//! Scoped list views and record mutations over a record source.

use crate::{
    access::{AccessError, Principal},
    aggregation::{
        domain::{
            AggregationError, Completion, ListCriteria, StatusBuckets, Summary, TeamSelector,
        },
        services::EntityListAggregator,
    },
    records::{
        domain::{
            ClosedEnum, EntityKind, ParseEnumError, Record, RecordDomainError, RecordId, TeamName,
        },
        ports::{RecordSource, RecordSourceError},
    },
};
use mockable::Clock;
use serde::Serialize;
use std::{marker::PhantomData, sync::Arc};
use thiserror::Error;

/// Service-level errors for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The principal's scope could not be resolved or was exceeded.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// A criterion or record failed aggregation.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    /// The record source failed.
    #[error(transparent)]
    Source(#[from] RecordSourceError),
    /// Record construction failed.
    #[error(transparent)]
    Domain(#[from] RecordDomainError),
    /// A requested status is not a status of the record type.
    #[error(transparent)]
    InvalidStatus(#[from] ParseEnumError),
    /// The record does not exist.
    #[error("record not found: {0}")]
    NotFound(RecordId),
    /// The record belongs to a team outside the principal's scope.
    #[error("{principal} may not modify records of team {team}")]
    Forbidden {
        /// Principal name.
        principal: String,
        /// Record team.
        team: TeamName,
    },
    /// Only administrators may perform the operation.
    #[error("{principal} is not an administrator")]
    AdminRequired {
        /// Principal name.
        principal: String,
    },
    /// Records of this kind are never hard-deleted.
    #[error("{0} records cannot be removed")]
    RemovalNotSupported(EntityKind),
}

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// A scoped, filtered, grouped, and summarised list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "R: Serialize"), rename_all = "camelCase")]
pub struct ListView<R: Record> {
    /// Matching records in display order.
    pub records: Vec<R>,
    /// The same records grouped by status.
    pub buckets: StatusBuckets<R>,
    /// Counts and totals.
    pub summary: Summary<R::Status>,
    /// Progress towards completion.
    pub completion: Completion,
}

/// Dashboard orchestration over one record type.
pub struct DashboardService<R, S, C>
where
    R: Record,
    S: RecordSource<R>,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    pub(super) clock: Arc<C>,
    aggregator: EntityListAggregator,
    record: PhantomData<fn() -> R>,
}

impl<R, S, C> Clone for DashboardService<R, S, C>
where
    R: Record,
    S: RecordSource<R>,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            clock: Arc::clone(&self.clock),
            aggregator: self.aggregator.clone(),
            record: PhantomData,
        }
    }
}

impl<R, S, C> DashboardService<R, S, C>
where
    R: Record,
    S: RecordSource<R>,
    C: Clock + Send + Sync,
{
    /// Creates a service with a default aggregator.
    #[must_use]
    pub fn new(source: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_aggregator(source, clock, EntityListAggregator::new())
    }

    /// Creates a service with a configured aggregator.
    #[must_use]
    pub const fn with_aggregator(
        source: Arc<S>,
        clock: Arc<C>,
        aggregator: EntityListAggregator,
    ) -> Self {
        Self {
            source,
            clock,
            aggregator,
            record: PhantomData,
        }
    }

    /// Returns the aggregator.
    #[must_use]
    pub const fn aggregator(&self) -> &EntityListAggregator {
        &self.aggregator
    }

    /// Builds the list view a principal sees for the criteria.
    ///
    /// The team criterion is narrowed to the principal's scope: team-bound
    /// principals asking for every team see their own.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when the scope is exceeded, a criterion is
    /// invalid, a cost is malformed, or the source fails.
    pub async fn view(
        &self,
        principal: &Principal,
        criteria: &ListCriteria<R>,
    ) -> DashboardResult<ListView<R>> {
        let requested = criteria
            .team()
            .map(|team| self.aggregator.team_selector(team))
            .transpose()?
            .unwrap_or(TeamSelector::All);
        let scope = principal.narrow(requested)?;
        let snapshot = self.source.records().await?;

        let scoped = self.aggregator.filter_by_team_selector(&snapshot, &scope);
        let records = self.aggregator.apply(&scoped, &criteria.without_team())?;
        let buckets = self.aggregator.group_by_status(&records);
        let summary = self.aggregator.summarize(&records)?;
        let completion = self.aggregator.completion(&records);

        Ok(ListView {
            records,
            buckets,
            summary,
            completion,
        })
    }

    /// Stores a new record for a team within the principal's scope.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Forbidden`] when the record's team is out of
    /// scope, or [`DashboardError::Source`] when persistence fails.
    pub async fn create(&self, principal: &Principal, record: R) -> DashboardResult<R> {
        ensure_access(principal, record.team())?;
        let stored = self.source.persist(&record).await?;
        tracing::info!(
            kind = %R::KIND,
            record = %stored.id(),
            team = %stored.team(),
            by = principal.name(),
            "created record"
        );
        Ok(stored)
    }

    /// Sets a record's status. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidStatus`] for an unknown status,
    /// [`DashboardError::NotFound`] for a missing record, and
    /// [`DashboardError::Forbidden`] when the record is out of scope.
    pub async fn update_status(
        &self,
        principal: &Principal,
        id: &RecordId,
        status: &str,
    ) -> DashboardResult<R> {
        let target = <R::Status as ClosedEnum>::parse(status)?;
        let current = self.find_in_scope(principal, id).await?;
        let updated = self.source.update_status(id, target).await?;
        tracing::info!(
            kind = %R::KIND,
            record = %id,
            from = %current.status(),
            to = %target,
            by = principal.name(),
            "updated record status"
        );
        Ok(updated)
    }

    /// Hard-deletes a task or stock request.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::RemovalNotSupported`] for other kinds,
    /// [`DashboardError::AdminRequired`] for non-administrators, and the
    /// lookup errors of [`Self::update_status`].
    pub async fn remove(&self, principal: &Principal, id: &RecordId) -> DashboardResult<()> {
        if !R::KIND.allows_removal() {
            return Err(DashboardError::RemovalNotSupported(R::KIND));
        }
        if !principal.role().is_admin() {
            return Err(DashboardError::AdminRequired {
                principal: principal.name().to_owned(),
            });
        }
        self.find_in_scope(principal, id).await?;
        self.source.remove(id).await?;
        tracing::info!(kind = %R::KIND, record = %id, by = principal.name(), "removed record");
        Ok(())
    }

    pub(super) async fn find_in_scope(
        &self,
        principal: &Principal,
        id: &RecordId,
    ) -> DashboardResult<R> {
        let record = self
            .source
            .find_by_id(id)
            .await?
            .ok_or_else(|| DashboardError::NotFound(id.clone()))?;
        ensure_access(principal, record.team())?;
        Ok(record)
    }

    pub(super) async fn store(&self, record: &R) -> DashboardResult<R> {
        Ok(self.source.persist(record).await?)
    }
}

fn ensure_access(principal: &Principal, team: &TeamName) -> DashboardResult<()> {
    if principal.can_access(team) {
        Ok(())
    } else {
        Err(DashboardError::Forbidden {
            principal: principal.name().to_owned(),
            team: team.clone(),
        })
    }
}
