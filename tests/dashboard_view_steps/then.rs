//! Then steps for dashboard view BDD scenarios.

use super::world::DashboardViewWorld;
use rstest_bdd_macros::then;
use teamboard::{
    access::AccessError,
    aggregation::domain::AggregationError,
    dashboard::services::DashboardError,
    records::domain::{ClosedEnum, TaskStatus},
};

#[then("the number of listed tasks is {count:usize}")]
fn lists_count(world: &DashboardViewWorld, count: usize) -> Result<(), eyre::Report> {
    let view = world.view()?;
    eyre::ensure!(
        view.records.len() == count,
        "expected {count} tasks, found {}",
        view.records.len()
    );
    eyre::ensure!(view.summary.total == count, "summary total mismatch");
    Ok(())
}

#[then(r#"the "{status}" bucket size is {count:usize}"#)]
fn bucket_holds(
    world: &DashboardViewWorld,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let view = world.view()?;
    let bucket = view.buckets.get(TaskStatus::parse(&status)?);
    eyre::ensure!(
        bucket.len() == count,
        "expected {count} in {status}, found {}",
        bucket.len()
    );
    Ok(())
}

#[then(r#"the first listed task is "{title}""#)]
fn first_listed(world: &DashboardViewWorld, title: String) -> Result<(), eyre::Report> {
    let first = world
        .view()?
        .records
        .first()
        .ok_or_else(|| eyre::eyre!("view is empty"))?;
    eyre::ensure!(first.title() == title, "expected {title}, found {}", first.title());
    Ok(())
}

#[then("the view is refused as out of scope")]
fn refused_out_of_scope(world: &DashboardViewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view result"))?;
    if !matches!(
        result,
        Err(DashboardError::Access(AccessError::OutOfScope { .. }))
    ) {
        return Err(eyre::eyre!("expected OutOfScope error, got {result:?}"));
    }
    Ok(())
}

#[then("the view is rejected as an invalid filter")]
fn rejected_invalid_filter(world: &DashboardViewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view result"))?;
    if !matches!(
        result,
        Err(DashboardError::Aggregation(
            AggregationError::InvalidFilterValue { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected InvalidFilterValue error, got {result:?}"));
    }
    Ok(())
}
