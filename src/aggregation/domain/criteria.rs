//! Filter and sort criteria.

use super::{AggregationError, AggregationResult};
use crate::records::domain::{ClosedEnum, Record, TeamName};
use serde::{Deserialize, Serialize};

fn is_wildcard(value: &str, wildcard: &str) -> bool {
    value.trim().eq_ignore_ascii_case(wildcard.trim())
}

/// Either every value of a closed enumeration or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector<E> {
    /// No restriction.
    All,
    /// Only this value.
    Only(E),
}

impl<E: ClosedEnum> Selector<E> {
    /// Parses a criterion, treating `wildcard` as [`Selector::All`].
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] when the value is
    /// neither the wildcard nor a variant of `E`.
    pub fn parse(value: &str, wildcard: &str) -> AggregationResult<Self> {
        if is_wildcard(value, wildcard) {
            return Ok(Self::All);
        }
        E::parse(value)
            .map(Self::Only)
            .map_err(|err| AggregationError::invalid_filter(err.field, err.value))
    }

    /// Returns `true` when the value passes.
    #[must_use]
    pub fn matches(&self, value: E) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == value,
        }
    }
}

/// Team scope of a view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TeamSelector {
    /// Every team.
    All,
    /// One team, matched with [`TeamName::matches`].
    Team(TeamName),
}

impl TeamSelector {
    /// Parses a team criterion, treating `wildcard` as [`TeamSelector::All`].
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InvalidFilterValue`] when the value is
    /// blank.
    pub fn parse(value: &str, wildcard: &str) -> AggregationResult<Self> {
        if is_wildcard(value, wildcard) {
            return Ok(Self::All);
        }
        TeamName::new(value)
            .map(Self::Team)
            .map_err(|_| AggregationError::invalid_filter("team", value))
    }

    /// Returns `true` when the team is in scope.
    #[must_use]
    pub fn matches(&self, team: &TeamName) -> bool {
        match self {
            Self::All => true,
            Self::Team(selected) => team.matches(selected.as_str()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

/// Date sort on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSort<F> {
    /// Sorted field.
    pub field: F,
    /// Direction.
    pub direction: SortDirection,
}

/// Combined list criteria as a presentation layer collects them.
///
/// Unset criteria do not filter.
#[derive(Debug, Clone)]
pub struct ListCriteria<R: Record> {
    pub(crate) team: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) priority: Option<String>,
    pub(crate) search_term: Option<String>,
    pub(crate) search_fields: Vec<R::SearchField>,
    pub(crate) sort: Option<DateSort<R::DateField>>,
}

impl<R: Record> Default for ListCriteria<R> {
    fn default() -> Self {
        Self {
            team: None,
            status: None,
            priority: None,
            search_term: None,
            search_fields: Vec::new(),
            sort: None,
        }
    }
}

impl<R: Record> ListCriteria<R> {
    /// Creates criteria that pass every record through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a team selector.
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Restricts to a status criterion.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts to a priority criterion.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Restricts to records whose fields contain the term.
    #[must_use]
    pub fn with_search(
        mut self,
        term: impl Into<String>,
        fields: impl IntoIterator<Item = R::SearchField>,
    ) -> Self {
        self.search_term = Some(term.into());
        self.search_fields = fields.into_iter().collect();
        self
    }

    /// Sorts the result by a date field.
    #[must_use]
    pub fn sorted_by(mut self, field: R::DateField, direction: SortDirection) -> Self {
        self.sort = Some(DateSort { field, direction });
        self
    }

    /// Returns the same criteria without a team restriction.
    #[must_use]
    pub fn without_team(&self) -> Self {
        Self {
            team: None,
            ..self.clone()
        }
    }

    /// Returns the team criterion, if set.
    #[must_use]
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }
}
