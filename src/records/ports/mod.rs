//! Port contracts for record access.
//!
//! Ports define infrastructure-agnostic interfaces used by dashboard services
//! and the aggregator's ingestion path.

pub mod ingest;
pub mod source;

pub use ingest::FromRow;
pub use source::{RecordSource, RecordSourceError, RecordSourceResult};
