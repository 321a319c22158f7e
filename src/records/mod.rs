//! Dashboard records and their access seams.
//!
//! Tasks, stock requests, meetings, and inventory items are modelled as typed
//! domain records. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
