//! Dashboard orchestration services.

mod board;
mod entities;

pub use board::{DashboardError, DashboardResult, DashboardService, ListView};
