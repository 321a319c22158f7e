//! In-memory integration tests for stock requests and inventory.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::rstest;
use teamboard::{
    access::Principal,
    aggregation::{domain::ListCriteria, services::EntityListAggregator},
    dashboard::services::{DashboardError, DashboardService},
    records::{
        adapters::InMemoryRecordSource,
        domain::{
            CostText, CurrencyAmount, InventoryItem, Priority, Record, RequestStatus, StockLevel,
            StockRequest, StockRequestData, TeamName,
        },
    },
};

fn request(item: &str, team: &TeamName, cost: &str, priority: Priority) -> StockRequestData {
    StockRequestData {
        item_name: item.to_owned(),
        quantity: 3,
        reason: "Restock".to_owned(),
        requested_by: team.clone(),
        priority,
        estimated_cost: CostText::new(cost),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_workflow_updates_summary() -> Result<(), eyre::Report> {
    let production = TeamName::new("Production Team")?;
    let worker = Principal::employee("Eva Brown", production.clone());
    let lead = Principal::team_admin("David Wilson", production.clone());
    let root = Principal::super_admin("Root");
    let board: DashboardService<StockRequest, _, _> = DashboardService::new(
        Arc::new(InMemoryRecordSource::new()),
        Arc::new(DefaultClock),
    );

    let bolts = board
        .raise_request(&worker, request("M6 bolts", &production, "₹1,200", Priority::High))
        .await?;
    let gloves = board
        .raise_request(&worker, request("Safety gloves", &production, "Rs. 450.50", Priority::Low))
        .await?;
    board.update_status(&lead, bolts.id(), "approved").await?;
    board.update_status(&lead, gloves.id(), "rejected").await?;
    let refused = board.remove(&worker, gloves.id()).await;
    board.remove(&root, gloves.id()).await?;

    let view = board
        .view(&root, &ListCriteria::new().with_priority("high"))
        .await?;

    eyre::ensure!(
        matches!(refused, Err(DashboardError::AdminRequired { .. })),
        "employees may not remove, got {refused:?}"
    );
    eyre::ensure!(view.records.len() == 1, "one high-priority request remains");
    eyre::ensure!(
        view.summary.status_count(RequestStatus::Approved) == 1,
        "bolts were approved"
    );
    eyre::ensure!(
        view.summary.total_cost == Some(CurrencyAmount::from_minor(120_000)),
        "unexpected total {:?}",
        view.summary.total_cost
    );
    eyre::ensure!(view.completion.is_finished(), "approved requests are complete");
    Ok(())
}

#[rstest]
fn inventory_summary_flags_critical_items() -> Result<(), eyre::Report> {
    let updated = NaiveDate::from_ymd_opt(2024, 1, 10).ok_or_else(|| eyre::eyre!("bad date"))?;
    let items = vec![
        InventoryItem::new("Resistors 10k", 45, 100, 500, updated)?,
        InventoryItem::new("Solder wire", 80, 100, 300, updated)?,
        InventoryItem::new("PCB blanks", 250, 50, 400, updated)?,
    ];

    let summary = EntityListAggregator::new().summarize_inventory(&items);

    eyre::ensure!(summary.has_critical(), "resistors are critical");
    eyre::ensure!(summary.level_count(StockLevel::Critical) == 1, "one critical item");
    eyre::ensure!(summary.level_count(StockLevel::Low) == 1, "one low item");
    eyre::ensure!(summary.level_count(StockLevel::Good) == 1, "one good item");
    Ok(())
}
