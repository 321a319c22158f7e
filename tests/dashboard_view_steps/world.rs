//! Shared world state for dashboard view BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use teamboard::{
    access::Principal,
    dashboard::services::{DashboardError, DashboardService, ListView},
    records::{adapters::InMemoryRecordSource, domain::Task},
};

/// Service type used by the BDD world.
pub type TaskBoard = DashboardService<Task, InMemoryRecordSource<Task>, DefaultClock>;

/// Scenario world for dashboard view behaviour tests.
pub struct DashboardViewWorld {
    pub source: Arc<InMemoryRecordSource<Task>>,
    pub service: TaskBoard,
    pub principal: Option<Principal>,
    pub last_view: Option<Result<ListView<Task>, DashboardError>>,
}

impl DashboardViewWorld {
    /// Creates a world over an empty task source.
    #[must_use]
    pub fn new() -> Self {
        let source = Arc::new(InMemoryRecordSource::new());
        let service = DashboardService::new(Arc::clone(&source), Arc::new(DefaultClock));

        Self {
            source,
            service,
            principal: None,
            last_view: None,
        }
    }

    /// Returns the signed-in principal.
    ///
    /// # Errors
    ///
    /// Returns an error when no principal has been set.
    pub fn principal(&self) -> Result<&Principal, eyre::Report> {
        self.principal
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing principal in scenario world"))
    }

    /// Returns the last successful view.
    ///
    /// # Errors
    ///
    /// Returns an error when no view was requested or it failed.
    pub fn view(&self) -> Result<&ListView<Task>, eyre::Report> {
        match self.last_view.as_ref() {
            Some(Ok(view)) => Ok(view),
            Some(Err(err)) => Err(eyre::eyre!("view failed: {err}")),
            None => Err(eyre::eyre!("missing view in scenario world")),
        }
    }
}

impl Default for DashboardViewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DashboardViewWorld {
    DashboardViewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
