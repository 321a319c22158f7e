//! Summary statistics for list views.

use crate::records::domain::{CurrencyAmount, Priority, RecordStatus, StockLevel};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts and totals over a record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary<S: RecordStatus> {
    /// Number of records summarised.
    pub total: usize,
    /// Count per status; every status is present.
    pub count_by_status: BTreeMap<S, usize>,
    /// Count per priority, for record types that carry one.
    pub count_by_priority: Option<BTreeMap<Priority, usize>>,
    /// Sum of estimated costs, for record types that carry one.
    pub total_cost: Option<CurrencyAmount>,
}

impl<S: RecordStatus> Summary<S> {
    /// Returns the count for a status.
    #[must_use]
    pub fn status_count(&self, status: S) -> usize {
        self.count_by_status.get(&status).copied().unwrap_or_default()
    }

    /// Returns the count for a priority, or `None` when priorities are not
    /// tracked.
    #[must_use]
    pub fn priority_count(&self, priority: Priority) -> Option<usize> {
        self.count_by_priority
            .as_ref()
            .map(|counts| counts.get(&priority).copied().unwrap_or_default())
    }
}

/// Progress of a collection towards completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Records in the completing status.
    pub completed: usize,
    /// All records.
    pub total: usize,
}

impl Completion {
    /// Returns `true` when every record is complete. Empty collections are
    /// not finished.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Inventory counts per stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// Number of items.
    pub total_items: usize,
    /// Count per level; every level is present.
    pub count_by_level: BTreeMap<StockLevel, usize>,
}

impl InventorySummary {
    /// Returns the count for a level.
    #[must_use]
    pub fn level_count(&self, level: StockLevel) -> usize {
        self.count_by_level.get(&level).copied().unwrap_or_default()
    }

    /// Returns `true` when any item is at a critical level.
    #[must_use]
    pub fn has_critical(&self) -> bool {
        self.level_count(StockLevel::Critical) > 0
    }
}
