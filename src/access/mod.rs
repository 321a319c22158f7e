//! Role-based team scope.
//!
//! Authentication happens elsewhere; this module only turns an authenticated
//! principal into the team selector it may pass to the aggregator.

mod principal;

pub use principal::{AccessError, Principal, Role};

#[cfg(test)]
mod tests;
