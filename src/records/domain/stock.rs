//! Stock requests raised by teams and approved centrally.

use super::{
    ClosedEnum, CostText, EntityKind, ParseEnumError, Priority, Record, RecordDomainError,
    RecordId, RecordStatus, TeamName, ids::required_text,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval status of a stock request.
///
/// Distinct from [`super::TaskStatus`]: requests are approved, tasks are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting a decision.
    Pending,
    /// Accepted.
    Approved,
    /// Declined.
    Rejected,
}

impl ClosedEnum for RequestStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl RecordStatus for RequestStatus {
    const WORK_QUEUE_ORDER: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected];

    fn is_complete(self) -> bool {
        self == Self::Approved
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RequestStatus {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Searchable stock request text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockSearchField {
    /// Requested item.
    ItemName,
    /// Justification.
    Reason,
}

/// Sortable stock request date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockDateField {
    /// Date the request was raised.
    RequestedDate,
}

/// Parameter object for a stock request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRequestData {
    /// Requested item.
    pub item_name: String,
    /// Number of units, must be positive.
    pub quantity: u32,
    /// Justification.
    pub reason: String,
    /// Requesting team.
    pub requested_by: TeamName,
    /// Urgency.
    pub priority: Priority,
    /// Cost text as entered.
    pub estimated_cost: CostText,
}

/// A team's request for stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRequest {
    id: RecordId,
    item_name: String,
    quantity: u32,
    reason: String,
    requested_by: TeamName,
    requested_date: NaiveDate,
    status: RequestStatus,
    priority: Priority,
    estimated_cost: CostText,
}

impl StockRequest {
    /// Raises a new pending request dated today.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError`] when the item name is blank or the
    /// quantity is zero.
    pub fn raise(data: StockRequestData, clock: &impl Clock) -> Result<Self, RecordDomainError> {
        Self::from_parts(
            RecordId::new(),
            data,
            clock.utc().date_naive(),
            RequestStatus::Pending,
        )
    }

    /// Reconstructs a request from stored parts.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError`] when the item name is blank or the
    /// quantity is zero.
    pub fn from_parts(
        id: RecordId,
        data: StockRequestData,
        requested_date: NaiveDate,
        status: RequestStatus,
    ) -> Result<Self, RecordDomainError> {
        if data.quantity == 0 {
            return Err(RecordDomainError::InvalidQuantity(data.quantity));
        }
        Ok(Self {
            id,
            item_name: required_text("item name", data.item_name)?,
            quantity: data.quantity,
            reason: data.reason,
            requested_by: data.requested_by,
            requested_date,
            status,
            priority: data.priority,
            estimated_cost: data.estimated_cost,
        })
    }

    /// Returns the requested item.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the requested quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the justification.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the request date.
    #[must_use]
    pub const fn requested_date(&self) -> NaiveDate {
        self.requested_date
    }
}

impl Record for StockRequest {
    type Status = RequestStatus;
    type SearchField = StockSearchField;
    type DateField = StockDateField;

    const KIND: EntityKind = EntityKind::StockRequest;
    const DEFAULT_SEARCH_FIELDS: &'static [StockSearchField] =
        &[StockSearchField::ItemName, StockSearchField::Reason];
    const CARRIES_PRIORITY: bool = true;
    const CARRIES_COST: bool = true;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn team(&self) -> &TeamName {
        &self.requested_by
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn estimated_cost(&self) -> Option<&CostText> {
        Some(&self.estimated_cost)
    }

    fn search_text(&self, field: StockSearchField) -> Vec<&str> {
        match field {
            StockSearchField::ItemName => vec![self.item_name.as_str()],
            StockSearchField::Reason => vec![self.reason.as_str()],
        }
    }

    fn date(&self, field: StockDateField) -> NaiveDateTime {
        match field {
            StockDateField::RequestedDate => self.requested_date.and_time(NaiveTime::MIN),
        }
    }
}
