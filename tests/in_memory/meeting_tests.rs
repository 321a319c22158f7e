//! In-memory integration tests for meeting minutes views.

use super::helpers::{MeetingBoard, meeting_rows, meetings};
use rstest::rstest;
use teamboard::{
    access::Principal,
    aggregation::{
        domain::{ListCriteria, SortDirection},
        services::EntityListAggregator,
    },
    dashboard::services::DashboardError,
    records::domain::{
        EntityKind, MeetingDateField, MeetingRecord, MeetingSearchField, MeetingStatus, Record,
        TeamName,
    },
};

fn titles(records: &[MeetingRecord]) -> Vec<&str> {
    records.iter().map(MeetingRecord::title).collect()
}

#[rstest]
fn ingest_sets_aside_rows_with_unknown_status() -> Result<(), eyre::Report> {
    let report = EntityListAggregator::new().ingest::<MeetingRecord>(meeting_rows()?);

    eyre::ensure!(report.accepted.len() == 3, "expected three clean rows");
    let rejected = report
        .rejected
        .first()
        .ok_or_else(|| eyre::eyre!("expected one rejected row"))?;
    eyre::ensure!(rejected.field == "status", "unexpected field {}", rejected.field);
    eyre::ensure!(rejected.value == "postponed", "unexpected value {}", rejected.value);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn super_admin_sorts_meetings_newest_first(meetings: MeetingBoard) -> Result<(), eyre::Report> {
    let criteria = ListCriteria::<MeetingRecord>::new()
        .sorted_by(MeetingDateField::ScheduledAt, SortDirection::Descending);

    let view = meetings
        .view(&Principal::super_admin("Root"), &criteria)
        .await?;

    eyre::ensure!(
        titles(&view.records)
            == [
                "Production Review Meeting",
                "Sprint Planning Q1 2024",
                "Design System Review",
            ],
        "unexpected order {:?}",
        titles(&view.records)
    );
    eyre::ensure!(view.summary.count_by_priority.is_none(), "meetings carry no priority");
    eyre::ensure!(view.summary.total_cost.is_none(), "meetings carry no cost");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn minutes_are_searchable_when_requested(meetings: MeetingBoard) -> Result<(), eyre::Report> {
    let root = Principal::super_admin("Root");
    let by_default = ListCriteria::<MeetingRecord>::new().with_search("button", []);
    let in_minutes =
        ListCriteria::<MeetingRecord>::new().with_search("button", [MeetingSearchField::Minutes]);

    let default_view = meetings.view(&root, &by_default).await?;
    let minutes_view = meetings.view(&root, &in_minutes).await?;

    eyre::ensure!(default_view.records.is_empty(), "title and agenda do not mention it");
    eyre::ensure!(
        titles(&minutes_view.records) == ["Design System Review"],
        "unexpected matches {:?}",
        titles(&minutes_view.records)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_members_see_their_own_meetings(meetings: MeetingBoard) -> Result<(), eyre::Report> {
    let member = Principal::employee("Alice Johnson", TeamName::new("software team")?);

    let view = meetings.view(&member, &ListCriteria::new()).await?;

    eyre::ensure!(
        titles(&view.records) == ["Sprint Planning Q1 2024"],
        "unexpected meetings {:?}",
        titles(&view.records)
    );
    eyre::ensure!(view.completion.is_finished(), "the only meeting is completed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn meetings_are_cancelled_not_removed(meetings: MeetingBoard) -> Result<(), eyre::Report> {
    let root = Principal::super_admin("Root");
    let scheduled = meetings
        .view(&root, &ListCriteria::new().with_status("scheduled"))
        .await?;
    let id = scheduled
        .records
        .first()
        .map(MeetingRecord::id)
        .ok_or_else(|| eyre::eyre!("expected a scheduled meeting"))?;

    let removal = meetings.remove(&root, id).await;
    let cancelled = meetings.update_status(&root, id, "cancelled").await?;

    eyre::ensure!(
        matches!(
            removal,
            Err(DashboardError::RemovalNotSupported(EntityKind::Meeting))
        ),
        "expected removal to be refused, got {removal:?}"
    );
    eyre::ensure!(
        cancelled.status() == MeetingStatus::Cancelled,
        "meeting should be cancelled"
    );
    Ok(())
}
