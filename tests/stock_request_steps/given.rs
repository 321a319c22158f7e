//! Given steps for stock request BDD scenarios.

use super::world::{StockRequestWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use teamboard::records::{
    adapters::StockRequestRow,
    domain::{CostText, Priority, StockRequestData},
};
use uuid::Uuid;

#[given(r#"a stock request for "{item}" costing "{cost}""#)]
fn stock_request(
    world: &mut StockRequestWorld,
    item: String,
    cost: String,
) -> Result<(), eyre::Report> {
    let data = StockRequestData {
        item_name: item,
        quantity: 1,
        reason: "Team supplies".to_owned(),
        requested_by: world.requester.team().cloned().ok_or_else(|| {
            eyre::eyre!("requester has no team in scenario world")
        })?,
        priority: Priority::Medium,
        estimated_cost: CostText::new(cost),
    };
    let raised = run_async(world.service.raise_request(&world.requester, data))
        .wrap_err("raise stock request")?;
    world.last_request = Some(raised);
    Ok(())
}

#[given(r#"a stored request row with status "{status}""#)]
fn stored_row(world: &mut StockRequestWorld, status: String) {
    world.rows.push(StockRequestRow {
        id: Uuid::new_v4().to_string(),
        item_name: "Printer paper".to_owned(),
        quantity: 10,
        reason: "Monthly supply".to_owned(),
        requested_by: "Operations".to_owned(),
        requested_date: "2024-01-05".to_owned(),
        status,
        priority: "low".to_owned(),
        estimated_cost: "₹2,500".to_owned(),
    });
}
