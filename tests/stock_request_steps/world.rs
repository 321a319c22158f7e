//! Shared world state for stock request BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use teamboard::{
    access::Principal,
    aggregation::domain::{AggregationError, StatusBuckets},
    dashboard::services::{DashboardError, DashboardService, ListView},
    records::{
        adapters::{InMemoryRecordSource, StockRequestRow},
        domain::{StockRequest, TeamName},
    },
};

/// Service type used by the BDD world.
pub type StockBoard =
    DashboardService<StockRequest, InMemoryRecordSource<StockRequest>, DefaultClock>;

/// Scenario world for stock request behaviour tests.
pub struct StockRequestWorld {
    pub service: StockBoard,
    pub requester: Principal,
    pub admin: Principal,
    pub last_request: Option<StockRequest>,
    pub last_view: Option<Result<ListView<StockRequest>, DashboardError>>,
    pub rows: Vec<StockRequestRow>,
    pub grouped: Option<Result<StatusBuckets<StockRequest>, AggregationError>>,
}

impl StockRequestWorld {
    /// Creates a world for the operations team over an empty source.
    ///
    /// # Errors
    ///
    /// Returns an error when the team name is rejected.
    pub fn new() -> Result<Self, eyre::Report> {
        let team = TeamName::new("Operations")?;
        let service = DashboardService::new(
            Arc::new(InMemoryRecordSource::new()),
            Arc::new(DefaultClock),
        );

        Ok(Self {
            service,
            requester: Principal::employee("Dev", team.clone()),
            admin: Principal::team_admin("Lee", team),
            last_request: None,
            last_view: None,
            rows: Vec::new(),
            grouped: None,
        })
    }

    /// Returns the last successful view.
    ///
    /// # Errors
    ///
    /// Returns an error when no view was requested or it failed.
    pub fn view(&self) -> Result<&ListView<StockRequest>, eyre::Report> {
        match self.last_view.as_ref() {
            Some(Ok(view)) => Ok(view),
            Some(Err(err)) => Err(eyre::eyre!("view failed: {err}")),
            None => Err(eyre::eyre!("missing view in scenario world")),
        }
    }
}

/// Fixture that creates a new scenario world.
///
/// # Panics
///
/// Panics when the fixed team name is rejected.
#[fixture]
pub fn world() -> StockRequestWorld {
    StockRequestWorld::new().expect("operations team is a valid team name")
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
