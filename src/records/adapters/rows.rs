//! Wire rows as delivered by the hosted data service.
//!
//! Rows carry enumerations, dates, and ids as plain strings. Converting a row
//! into a domain record is the single place where out-of-domain values are
//! caught, so grouped views never see them.

use crate::records::{
    domain::{
        ClosedEnum, Comment, CostText, MeetingRecord, PersistedTaskData, Priority,
        RecordDomainError, RecordId, RecordStateError, RequestStatus, StockRequest,
        StockRequestData, Task, TeamName,
    },
    ports::FromRow,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Task comment as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRow {
    /// Author display name.
    pub author: String,
    /// Comment text.
    pub text: String,
    /// ISO date.
    pub date: String,
}

/// Task as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    /// Client-generated id, a UUID or a millisecond timestamp.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Status spelling.
    pub status: String,
    /// Priority spelling.
    pub priority: String,
    /// Assignee display name.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Team name.
    pub team: String,
    /// ISO due date.
    pub due_date: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Comments in posting order.
    #[serde(default)]
    pub comments: Vec<CommentRow>,
}

/// Stock request as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRequestRow {
    /// Client-generated id, a UUID or a millisecond timestamp.
    pub id: String,
    /// Requested item.
    pub item_name: String,
    /// Requested units.
    pub quantity: u32,
    /// Justification.
    #[serde(default)]
    pub reason: String,
    /// Requesting team name.
    pub requested_by: String,
    /// ISO request date.
    pub requested_date: String,
    /// Status spelling.
    pub status: String,
    /// Priority spelling.
    pub priority: String,
    /// Cost text as entered.
    pub estimated_cost: String,
}

/// Meeting as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRow {
    /// Client-generated id, a UUID or a millisecond timestamp.
    pub id: String,
    /// Title.
    pub title: String,
    /// ISO date.
    pub date: String,
    /// Start time, `14:00` or `2:00 PM`.
    pub time: String,
    /// Team name.
    pub team: String,
    /// Attendee names.
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Status spelling.
    pub status: String,
    /// Agenda items in order.
    #[serde(default)]
    pub agenda: Vec<String>,
    /// Recorded minutes.
    #[serde(default)]
    pub minutes: Option<String>,
}

fn parse_id(row_id: &str) -> Result<RecordId, RecordStateError> {
    RecordId::parse(row_id).map_err(|_| RecordStateError::new(row_id, "id", row_id))
}

fn parse_enum<E: ClosedEnum>(row_id: &str, value: &str) -> Result<E, RecordStateError> {
    E::parse(value).map_err(|err| RecordStateError::new(row_id, err.field, err.value))
}

fn parse_date(row_id: &str, field: &'static str, value: &str) -> Result<NaiveDate, RecordStateError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| RecordStateError::new(row_id, field, value))
}

fn parse_time(row_id: &str, value: &str) -> Result<NaiveTime, RecordStateError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%I:%M %p"))
        .map_err(|_| RecordStateError::new(row_id, "time", value))
}

fn parse_team(row_id: &str, field: &'static str, value: &str) -> Result<TeamName, RecordStateError> {
    TeamName::new(value).map_err(|_| RecordStateError::new(row_id, field, value))
}

fn invalid(row_id: &str, err: &RecordDomainError) -> RecordStateError {
    let field = match err {
        RecordDomainError::EmptyText(field) => *field,
        RecordDomainError::EmptyTeamName => "team",
        RecordDomainError::InvalidQuantity(_) => "quantity",
        RecordDomainError::EmptyComment => "comments",
        RecordDomainError::InvertedStockBounds { .. } => "stock bounds",
    };
    RecordStateError::new(row_id, field, err.to_string())
}

impl FromRow for Task {
    type Row = TaskRow;

    fn row_id(row: &TaskRow) -> &str {
        &row.id
    }

    fn from_row(row: TaskRow) -> Result<Self, RecordStateError> {
        let row_id = row.id.as_str();
        let created_at = DateTime::parse_from_rfc3339(row.created_at.trim())
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(|_| RecordStateError::new(row_id, "createdAt", &row.created_at))?;
        let comments = row
            .comments
            .iter()
            .map(|comment| {
                let date = parse_date(row_id, "comments", &comment.date)?;
                Comment::dated(&comment.author, &comment.text, date)
                    .map_err(|err| invalid(row_id, &err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_persisted(PersistedTaskData {
            id: parse_id(row_id)?,
            title: row.title.clone(),
            description: row.description.clone(),
            status: parse_enum(row_id, &row.status)?,
            priority: parse_enum::<Priority>(row_id, &row.priority)?,
            assignee: row.assignee.clone(),
            team: parse_team(row_id, "team", &row.team)?,
            due_date: parse_date(row_id, "dueDate", &row.due_date)?,
            created_at,
            comments,
        })
        .map_err(|err| invalid(row_id, &err))
    }
}

impl FromRow for StockRequest {
    type Row = StockRequestRow;

    fn row_id(row: &StockRequestRow) -> &str {
        &row.id
    }

    fn from_row(row: StockRequestRow) -> Result<Self, RecordStateError> {
        let row_id = row.id.as_str();
        let data = StockRequestData {
            item_name: row.item_name.clone(),
            quantity: row.quantity,
            reason: row.reason.clone(),
            requested_by: parse_team(row_id, "requestedBy", &row.requested_by)?,
            priority: parse_enum(row_id, &row.priority)?,
            estimated_cost: CostText::new(row.estimated_cost.clone()),
        };
        Self::from_parts(
            parse_id(row_id)?,
            data,
            parse_date(row_id, "requestedDate", &row.requested_date)?,
            parse_enum::<RequestStatus>(row_id, &row.status)?,
        )
        .map_err(|err| invalid(row_id, &err))
    }
}

impl FromRow for MeetingRecord {
    type Row = MeetingRow;

    fn row_id(row: &MeetingRow) -> &str {
        &row.id
    }

    fn from_row(row: MeetingRow) -> Result<Self, RecordStateError> {
        let row_id = row.id.as_str();
        let id = parse_id(row_id)?;
        let status = parse_enum(row_id, &row.status)?;
        let meeting = Self::schedule(
            row.title.clone(),
            parse_team(row_id, "team", &row.team)?,
            parse_date(row_id, "date", &row.date)?,
            parse_time(row_id, &row.time)?,
        )
        .map_err(|err| invalid(row_id, &err))?
        .with_id(id)
        .with_status(status)
        .with_attendees(row.attendees.iter().cloned())
        .with_agenda(row.agenda.iter().cloned())
        .with_minutes(row.minutes.clone().unwrap_or_default());
        Ok(meeting)
    }
}
