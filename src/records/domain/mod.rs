//! Domain model for dashboard records.
//!
//! Tasks, stock requests, and meetings share the [`Record`] abstraction so the
//! aggregator can treat them uniformly. Inventory items are summarised on
//! their own because their level is derived rather than stored.

mod currency;
mod error;
mod ids;
mod inventory;
mod meeting;
mod priority;
mod record;
mod stock;
mod task;

pub use currency::{CostText, CurrencyAmount};
pub use error::{ParseCurrencyError, ParseEnumError, RecordDomainError, RecordStateError};
pub use ids::{RecordId, TeamName};
pub use inventory::{InventoryItem, StockLevel};
pub use meeting::{MeetingDateField, MeetingRecord, MeetingSearchField, MeetingStatus};
pub use priority::Priority;
pub use record::{ClosedEnum, EntityKind, Record, RecordStatus};
pub use stock::{RequestStatus, StockDateField, StockRequest, StockRequestData, StockSearchField};
pub use task::{
    Comment, NewTask, PersistedTaskData, Task, TaskDateField, TaskSearchField, TaskStatus,
};
