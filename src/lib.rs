//! Teamboard: entity list aggregation for a team dashboard.
//!
//! This crate turns snapshots of tasks, stock requests, and meetings into the
//! filtered, grouped, sorted, and summarised lists a dashboard renders, scoped
//! to the team a signed-in principal may see.
//!
//! # Architecture
//!
//! Teamboard follows hexagonal architecture principles:
//!
//! - **Domain**: Typed records and list criteria with no I/O
//! - **Ports**: Abstract trait interfaces for record sources and ingestion
//! - **Adapters**: In-memory source and string-typed wire rows
//!
//! # Modules
//!
//! - [`records`]: Record types, ids, and currency
//! - [`aggregation`]: Pure list operations over record snapshots
//! - [`access`]: Role-based team scope
//! - [`dashboard`]: Scoped views and record mutations

pub mod access;
pub mod aggregation;
pub mod dashboard;
pub mod records;
