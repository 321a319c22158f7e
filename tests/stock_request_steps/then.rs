//! Then steps for stock request BDD scenarios.

use super::world::StockRequestWorld;
use rstest_bdd_macros::then;
use teamboard::{
    aggregation::domain::AggregationError,
    dashboard::services::DashboardError,
    records::domain::{ClosedEnum, RequestStatus},
};

#[then(r#"the total estimated cost is "{amount}""#)]
fn total_cost_is(world: &StockRequestWorld, amount: String) -> Result<(), eyre::Report> {
    let total = world
        .view()?
        .summary
        .total_cost
        .ok_or_else(|| eyre::eyre!("stock summary has no total cost"))?;
    eyre::ensure!(
        total.to_string() == amount,
        "expected total {amount}, found {total}"
    );
    Ok(())
}

#[then(r#"the "{status}" bucket size is {count:usize}"#)]
fn bucket_size(
    world: &StockRequestWorld,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let bucket = world.view()?.buckets.get(RequestStatus::parse(&status)?);
    eyre::ensure!(
        bucket.len() == count,
        "expected {count} in {status}, found {}",
        bucket.len()
    );
    Ok(())
}

#[then(r#"the view fails with a malformed cost of "{value}""#)]
fn view_fails_on_cost(world: &StockRequestWorld, value: String) -> Result<(), eyre::Report> {
    let result = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view result"))?;
    match result {
        Err(DashboardError::Aggregation(AggregationError::MalformedCurrency {
            value: rejected,
            ..
        })) if *rejected == value => Ok(()),
        other => Err(eyre::eyre!("expected MalformedCurrency error, got {other:?}")),
    }
}

#[then(r#"grouping fails on field "{field}" with value "{value}""#)]
fn grouping_fails(
    world: &StockRequestWorld,
    field: String,
    value: String,
) -> Result<(), eyre::Report> {
    let result = world
        .grouped
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing grouping result"))?;
    match result {
        Err(AggregationError::InvalidRecordState(err))
            if err.field == field && err.value == value =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected InvalidRecordState error, got {other:?}")),
    }
}
