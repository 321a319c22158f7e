//! Filtering, grouping, sorting, and summarising of record snapshots.

use crate::{
    aggregation::{
        config::AggregatorConfig,
        domain::{
            AggregationError, AggregationResult, Completion, InventorySummary, ListCriteria,
            Selector, SortDirection, StatusBuckets, Summary, TeamSelector,
        },
    },
    records::domain::{
        ClosedEnum, CurrencyAmount, InventoryItem, Priority, Record, RecordStatus, StockLevel,
    },
};
use std::collections::BTreeMap;

/// Pure list operations over homogeneous record snapshots.
///
/// No operation mutates its input or performs I/O. Filters on independent
/// fields commute, so criteria may be applied in any order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mockable::DefaultClock;
/// use teamboard::aggregation::services::EntityListAggregator;
/// use teamboard::records::domain::{NewTask, Task, TaskStatus, TeamName};
///
/// let team = TeamName::new("Software Team").expect("valid team");
/// let due = NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date");
/// let task = Task::create(NewTask::new("Fix login bug", team, due), &DefaultClock)
///     .expect("valid task");
///
/// let aggregator = EntityListAggregator::new();
/// let scoped = aggregator
///     .filter_by_team(&[task], "software team")
///     .expect("valid selector");
/// let buckets = aggregator.group_by_status(&scoped);
/// assert_eq!(buckets.get(TaskStatus::ToDo).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityListAggregator {
    config: AggregatorConfig,
}

impl EntityListAggregator {
    /// Creates an aggregator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator with custom configuration.
    #[must_use]
    pub const fn with_config(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Parses a team criterion under this aggregator's wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] for a blank selector.
    pub fn team_selector(&self, team: &str) -> AggregationResult<TeamSelector> {
        TeamSelector::parse(team, &self.config.wildcard)
    }

    /// Keeps records whose team matches the selector.
    ///
    /// Teams match case-insensitively after trimming; the wildcard keeps
    /// everything.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] for a blank selector.
    pub fn filter_by_team<R: Record>(&self, records: &[R], team: &str) -> AggregationResult<Vec<R>> {
        let selector = self.team_selector(team)?;
        Ok(self.filter_by_team_selector(records, &selector))
    }

    /// Keeps records within an already parsed team scope.
    #[must_use]
    pub fn filter_by_team_selector<R: Record>(
        &self,
        records: &[R],
        selector: &TeamSelector,
    ) -> Vec<R> {
        retain(records, |record| selector.matches(record.team()))
    }

    /// Keeps records with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] when the status is
    /// neither the wildcard nor a status of `R`.
    pub fn filter_by_status<R: Record>(
        &self,
        records: &[R],
        status: &str,
    ) -> AggregationResult<Vec<R>> {
        let selector = Selector::<R::Status>::parse(status, &self.config.wildcard)?;
        Ok(retain(records, |record| selector.matches(record.status())))
    }

    /// Keeps records with the given priority.
    ///
    /// Records without a priority only pass the wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] when the priority is
    /// neither the wildcard nor a known priority.
    pub fn filter_by_priority<R: Record>(
        &self,
        records: &[R],
        priority: &str,
    ) -> AggregationResult<Vec<R>> {
        let selector = Selector::<Priority>::parse(priority, &self.config.wildcard)?;
        Ok(retain(records, |record| match selector {
            Selector::All => true,
            Selector::Only(_) => record
                .priority()
                .is_some_and(|value| selector.matches(value)),
        }))
    }

    /// Keeps records where any listed field contains the term,
    /// case-insensitively.
    ///
    /// A blank term keeps everything. Other terms are matched as given,
    /// surrounding spaces included. An empty field list searches the record
    /// type's default fields.
    #[must_use]
    pub fn filter_by_search_term<R: Record>(
        &self,
        records: &[R],
        term: &str,
        fields: &[R::SearchField],
    ) -> Vec<R> {
        if term.trim().is_empty() {
            return records.to_vec();
        }
        let needle = term.to_lowercase();
        let searched = if fields.is_empty() {
            R::DEFAULT_SEARCH_FIELDS
        } else {
            fields
        };
        retain(records, |record| {
            searched.iter().any(|field| {
                record
                    .search_text(*field)
                    .into_iter()
                    .any(|text| text.to_lowercase().contains(&needle))
            })
        })
    }

    /// Groups records by status, keeping input order within each bucket.
    #[must_use]
    pub fn group_by_status<R: Record>(&self, records: &[R]) -> StatusBuckets<R> {
        let mut buckets = StatusBuckets::empty();
        for record in records {
            buckets.push(record.clone());
        }
        tracing::debug!(
            kind = %R::KIND,
            records = records.len(),
            "grouped records by status"
        );
        buckets
    }

    /// Sorts records by a date field. Ties keep their input order in both
    /// directions.
    #[must_use]
    pub fn sort_by_date<R: Record>(
        &self,
        records: &[R],
        field: R::DateField,
        direction: SortDirection,
    ) -> Vec<R> {
        let mut sorted = records.to_vec();
        sort_in_place(&mut sorted, field, direction);
        sorted
    }

    /// Orders records by work-queue status precedence, keeping input order
    /// within a status.
    #[must_use]
    pub fn order_by_status<R: Record>(&self, records: &[R]) -> Vec<R> {
        let rank = |status: R::Status| {
            <R::Status as RecordStatus>::WORK_QUEUE_ORDER
                .iter()
                .position(|candidate| *candidate == status)
                .unwrap_or(usize::MAX)
        };
        let mut ordered = records.to_vec();
        ordered.sort_by_key(|record| rank(record.status()));
        ordered
    }

    /// Counts records in the completing status.
    #[must_use]
    pub fn completion<R: Record>(&self, records: &[R]) -> Completion {
        Completion {
            completed: records
                .iter()
                .filter(|record| record.status().is_complete())
                .count(),
            total: records.len(),
        }
    }

    /// Summarises counts per status and priority and the total estimated
    /// cost.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::MalformedCurrency`] when any cost fails to
    /// parse, and [`AggregationError::CostOverflow`] when the total does not
    /// fit. No partial summary is produced.
    pub fn summarize<R: Record>(&self, records: &[R]) -> AggregationResult<Summary<R::Status>> {
        let mut count_by_status: BTreeMap<R::Status, usize> =
            zeroed(<R::Status as ClosedEnum>::VARIANTS);
        let mut count_by_priority = R::CARRIES_PRIORITY.then(|| zeroed(Priority::VARIANTS));

        for record in records {
            *count_by_status.entry(record.status()).or_default() += 1;
            if let (Some(counts), Some(priority)) = (count_by_priority.as_mut(), record.priority())
            {
                *counts.entry(priority).or_default() += 1;
            }
        }

        let total_cost = if R::CARRIES_COST {
            Some(self.total_cost(records)?)
        } else {
            None
        };

        tracing::debug!(
            kind = %R::KIND,
            records = records.len(),
            "summarised records"
        );

        Ok(Summary {
            total: records.len(),
            count_by_status,
            count_by_priority,
            total_cost,
        })
    }

    fn total_cost<R: Record>(&self, records: &[R]) -> AggregationResult<CurrencyAmount> {
        records
            .iter()
            .filter_map(|record| record.estimated_cost().map(|cost| (record.id(), cost)))
            .try_fold(CurrencyAmount::ZERO, |total, (id, cost)| {
                let amount = CurrencyAmount::parse(cost.as_str(), &self.config.currency_symbols)
                    .map_err(|_| {
                        tracing::warn!(record = %id, cost = %cost, "malformed estimated cost");
                        AggregationError::MalformedCurrency {
                            record: id.clone(),
                            value: cost.as_str().to_owned(),
                        }
                    })?;
                total
                    .checked_add(amount)
                    .ok_or(AggregationError::CostOverflow)
            })
    }

    /// Applies every set criterion, then the optional sort.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] for any invalid
    /// criterion. Criteria are validated before any filtering.
    pub fn apply<R: Record>(
        &self,
        records: &[R],
        criteria: &ListCriteria<R>,
    ) -> AggregationResult<Vec<R>> {
        let wildcard = self.config.wildcard.as_str();
        let team = criteria
            .team
            .as_deref()
            .map(|team| TeamSelector::parse(team, wildcard))
            .transpose()?
            .unwrap_or(TeamSelector::All);
        let status = criteria
            .status
            .as_deref()
            .map(|status| Selector::<R::Status>::parse(status, wildcard))
            .transpose()?
            .unwrap_or(Selector::All);
        let priority = criteria
            .priority
            .as_deref()
            .map(|priority| Selector::<Priority>::parse(priority, wildcard))
            .transpose()?
            .unwrap_or(Selector::All);

        let filtered = retain(records, |record| {
            team.matches(record.team())
                && status.matches(record.status())
                && match priority {
                    Selector::All => true,
                    Selector::Only(_) => record
                        .priority()
                        .is_some_and(|value| priority.matches(value)),
                }
        });
        let term = criteria.search_term.as_deref().unwrap_or_default();
        let mut result = self.filter_by_search_term(&filtered, term, &criteria.search_fields);
        if let Some(sort) = criteria.sort {
            sort_in_place(&mut result, sort.field, sort.direction);
        }

        tracing::debug!(
            kind = %R::KIND,
            input = records.len(),
            output = result.len(),
            "applied list criteria"
        );
        Ok(result)
    }

    /// Counts inventory items per derived stock level.
    #[must_use]
    pub fn summarize_inventory(&self, items: &[InventoryItem]) -> InventorySummary {
        let mut count_by_level = zeroed(StockLevel::VARIANTS);
        for item in items {
            *count_by_level.entry(item.level()).or_default() += 1;
        }
        InventorySummary {
            total_items: items.len(),
            count_by_level,
        }
    }
}

fn retain<R: Record>(records: &[R], keep: impl Fn(&R) -> bool) -> Vec<R> {
    records.iter().filter(|record| keep(record)).cloned().collect()
}

fn sort_in_place<R: Record>(records: &mut [R], field: R::DateField, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by_key(|record| record.date(field)),
        SortDirection::Descending => {
            records.sort_by(|left, right| right.date(field).cmp(&left.date(field)));
        }
    }
}

fn zeroed<K: Ord + Copy>(keys: &[K]) -> BTreeMap<K, usize> {
    keys.iter().map(|key| (*key, 0)).collect()
}
