//! Unit tests for the records module.
//!
//! Tests are organised by concern: domain construction, currency parsing,
//! wire-row ingestion, and the in-memory source.
