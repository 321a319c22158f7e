//! When steps for dashboard view BDD scenarios.

use super::world::{DashboardViewWorld, run_async};
use rstest_bdd_macros::when;
use teamboard::{
    aggregation::domain::ListCriteria,
    records::domain::{Task, TaskSearchField},
};

fn view_with(
    world: &mut DashboardViewWorld,
    criteria: &ListCriteria<Task>,
) -> Result<(), eyre::Report> {
    let principal = world.principal()?.clone();
    let result = run_async(world.service.view(&principal, criteria));
    world.last_view = Some(result);
    Ok(())
}

#[when(r#"the user views tasks for team "{team}""#)]
fn view_team(world: &mut DashboardViewWorld, team: String) -> Result<(), eyre::Report> {
    view_with(world, &ListCriteria::new().with_team(team))
}

#[when(r#"the user views tasks with status "{status}""#)]
fn view_status(world: &mut DashboardViewWorld, status: String) -> Result<(), eyre::Report> {
    view_with(world, &ListCriteria::new().with_status(status))
}

#[when(r#"the user searches task titles for "{term}""#)]
fn search_titles(world: &mut DashboardViewWorld, term: String) -> Result<(), eyre::Report> {
    view_with(
        world,
        &ListCriteria::new().with_search(term, [TaskSearchField::Title]),
    )
}
