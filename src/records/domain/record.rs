//! Shared abstractions over aggregatable dashboard records.

use super::{CostText, ParseEnumError, Priority, RecordId, TeamName};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::{fmt, hash::Hash};

/// A closed enumeration with a canonical snake_case spelling.
pub trait ClosedEnum:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// Field name used in error messages.
    const FIELD: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the canonical storage representation.
    fn as_str(self) -> &'static str;

    /// Parses the canonical spelling exactly.
    ///
    /// Other casings and padded values are data errors, not aliases.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEnumError`] when the value names no variant.
    fn parse(value: &str) -> Result<Self, ParseEnumError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| ParseEnumError::new(Self::FIELD, value))
    }
}

/// Lifecycle status of an aggregatable record.
pub trait RecordStatus: ClosedEnum {
    /// Display precedence for work-queue views.
    const WORK_QUEUE_ORDER: &'static [Self];

    /// Returns `true` for the status that counts as successfully finished.
    fn is_complete(self) -> bool;
}

/// The kinds of record the dashboard aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Team task.
    Task,
    /// Stock request raised by a team.
    StockRequest,
    /// Meeting and its minutes.
    Meeting,
}

impl EntityKind {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::StockRequest => "stock_request",
            Self::Meeting => "meeting",
        }
    }

    /// Whether records of this kind may be hard-deleted by an admin.
    #[must_use]
    pub const fn allows_removal(self) -> bool {
        matches!(self, Self::Task | Self::StockRequest)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A homogeneous record type the aggregator can filter, group, and summarise.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    /// Status enumeration for this record type.
    type Status: RecordStatus;
    /// Text fields that may be searched.
    type SearchField: Copy + fmt::Debug + Send + Sync + 'static;
    /// Date fields that may be sorted on.
    type DateField: Copy + fmt::Debug + Send + Sync + 'static;

    /// Kind tag for logging and capability checks.
    const KIND: EntityKind;

    /// Fields searched when the caller lists none.
    const DEFAULT_SEARCH_FIELDS: &'static [Self::SearchField];

    /// Whether the record type carries a priority.
    const CARRIES_PRIORITY: bool = false;

    /// Whether the record type carries an estimated cost.
    const CARRIES_COST: bool = false;

    /// Returns the record identifier.
    fn id(&self) -> &RecordId;

    /// Returns the owning team.
    fn team(&self) -> &TeamName;

    /// Returns the current status.
    fn status(&self) -> Self::Status;

    /// Overwrites the status. Any status may follow any other.
    fn set_status(&mut self, status: Self::Status);

    /// Returns the priority, when the record type carries one.
    fn priority(&self) -> Option<Priority> {
        None
    }

    /// Returns the estimated cost text, when the record type carries one.
    fn estimated_cost(&self) -> Option<&CostText> {
        None
    }

    /// Returns every text value of the given field.
    fn search_text(&self, field: Self::SearchField) -> Vec<&str>;

    /// Returns the sort key of the given date field.
    fn date(&self, field: Self::DateField) -> NaiveDateTime;
}
