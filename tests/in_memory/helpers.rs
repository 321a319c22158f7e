//! Shared test helpers for in-memory dashboard integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;
use teamboard::{
    aggregation::services::EntityListAggregator,
    dashboard::services::DashboardService,
    records::{
        adapters::{InMemoryRecordSource, MeetingRow},
        domain::MeetingRecord,
    },
};

/// Service type over meetings.
pub type MeetingBoard =
    DashboardService<MeetingRecord, InMemoryRecordSource<MeetingRecord>, DefaultClock>;

/// Meeting rows as the hosted data service returns them.
///
/// # Errors
///
/// Returns an error if the fixture document does not deserialize.
pub fn meeting_rows() -> Result<Vec<MeetingRow>, serde_json::Error> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "title": "Sprint Planning Q1 2024",
            "date": "2024-01-15",
            "time": "10:00 AM",
            "team": "Software Team",
            "attendees": ["Alice Johnson", "Bob Smith", "Carol Davis"],
            "status": "completed",
            "agenda": ["Sprint goals review", "Task assignments", "Timeline discussion"],
            "minutes": "Discussed Q1 goals and assigned tasks. Sprint duration: 2 weeks."
        },
        {
            "id": "2",
            "title": "Production Review Meeting",
            "date": "2024-01-18",
            "time": "2:00 PM",
            "team": "Production Team",
            "attendees": ["David Wilson", "Eva Brown"],
            "status": "scheduled",
            "agenda": ["Production metrics", "Quality control"],
            "minutes": ""
        },
        {
            "id": "3",
            "title": "Design System Review",
            "date": "2024-01-12",
            "time": "11:00 AM",
            "team": "Design Team",
            "attendees": ["Grace Lee", "Henry Chen"],
            "status": "completed",
            "agenda": ["Component library updates", "Accessibility improvements"],
            "minutes": "Updated component library with new button variants."
        },
        {
            "id": "1705312800000",
            "title": "Hardware Testing Protocol",
            "date": "2024-01-20",
            "time": "3:00 PM",
            "team": "Hardware & Assembly",
            "attendees": ["Ian Parker"],
            "status": "postponed",
            "agenda": ["Testing procedures"]
        }
    ]))
}

/// Provides a meeting board seeded from the clean fixture rows.
///
/// # Panics
///
/// Panics if the fixture rows do not deserialize.
#[fixture]
pub fn meetings() -> MeetingBoard {
    let rows = meeting_rows().expect("fixture rows deserialize");
    let report = EntityListAggregator::new().ingest::<MeetingRecord>(rows);
    DashboardService::new(
        Arc::new(InMemoryRecordSource::seeded(report.accepted)),
        Arc::new(DefaultClock),
    )
}
