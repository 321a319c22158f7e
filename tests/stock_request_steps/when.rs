//! When steps for stock request BDD scenarios.

use super::world::{StockRequestWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use teamboard::{
    aggregation::domain::ListCriteria,
    records::domain::{Record, StockRequest},
};

#[when("the operations team views its stock requests")]
fn view_requests(world: &mut StockRequestWorld) {
    let result = run_async(world.service.view(&world.requester, &ListCriteria::new()));
    world.last_view = Some(result);
}

#[when(r#"the team admin marks the last request "{status}""#)]
fn mark_last_request(world: &mut StockRequestWorld, status: String) -> Result<(), eyre::Report> {
    let id = world
        .last_request
        .as_ref()
        .map(StockRequest::id)
        .ok_or_else(|| eyre::eyre!("missing stock request in scenario world"))?;
    let updated = run_async(world.service.update_status(&world.admin, id, &status))
        .wrap_err("update stock request status")?;
    world.last_request = Some(updated);
    Ok(())
}

#[when("the stored rows are grouped by status")]
fn group_rows(world: &mut StockRequestWorld) {
    let rows = std::mem::take(&mut world.rows);
    let grouped = world
        .service
        .aggregator()
        .group_rows_by_status::<StockRequest>(rows);
    world.grouped = Some(grouped);
}
