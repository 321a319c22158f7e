//! Domain model for list aggregation: criteria, grouped views, summaries, and
//! the error taxonomy.

mod buckets;
mod criteria;
mod error;
mod summary;

pub use buckets::StatusBuckets;
pub use criteria::{DateSort, ListCriteria, Selector, SortDirection, TeamSelector};
pub use error::{AggregationError, AggregationResult};
pub use summary::{Completion, InventorySummary, Summary};
