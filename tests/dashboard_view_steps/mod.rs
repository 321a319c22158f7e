//! Step definitions for dashboard view scenarios.

pub mod then;
pub mod when;
pub mod world;
