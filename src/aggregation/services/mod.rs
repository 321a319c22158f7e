//! Aggregation services.

mod aggregator;
mod ingest;

pub use aggregator::EntityListAggregator;
pub use ingest::IngestReport;
