//! Adapter implementations for record access.
//!
//! - [`memory`]: in-memory record source
//! - [`rows`]: wire row ingestion

pub mod memory;
pub mod rows;

pub use memory::InMemoryRecordSource;
pub use rows::{CommentRow, MeetingRow, StockRequestRow, TaskRow};
