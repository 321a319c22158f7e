//! Entity list aggregation.
//!
//! Turns a snapshot of homogeneous records into the filtered, team-scoped,
//! status-grouped, and summarised views the dashboard renders. Every
//! operation is a pure function of its inputs; the aggregator has no notion
//! of users or roles and never fetches data itself.
//!
//! - Criteria, buckets, summaries, and errors in [`domain`]
//! - Tunables in [`config`]
//! - The aggregator and row ingestion in [`services`]

pub mod config;
pub mod domain;
pub mod services;
