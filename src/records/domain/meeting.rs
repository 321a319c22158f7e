//! Meetings and their minutes.

use super::{
    ClosedEnum, EntityKind, ParseEnumError, Record, RecordDomainError, RecordId, RecordStatus,
    TeamName, ids::required_text,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// Meeting status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// Upcoming.
    Scheduled,
    /// Held; minutes may be attached.
    Completed,
    /// Called off.
    Cancelled,
}

impl ClosedEnum for MeetingStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[Self::Scheduled, Self::Completed, Self::Cancelled];

    fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl RecordStatus for MeetingStatus {
    const WORK_QUEUE_ORDER: &'static [Self] = &[Self::Scheduled, Self::Completed, Self::Cancelled];

    fn is_complete(self) -> bool {
        self == Self::Completed
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MeetingStatus {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Searchable meeting text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingSearchField {
    /// Meeting title.
    Title,
    /// Any agenda item.
    Agenda,
    /// Recorded minutes.
    Minutes,
}

/// Sortable meeting date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingDateField {
    /// Meeting date combined with its start time.
    ScheduledAt,
}

/// A team meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    id: RecordId,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    team: TeamName,
    attendees: BTreeSet<String>,
    status: MeetingStatus,
    agenda: Vec<String>,
    minutes: Option<String>,
}

impl MeetingRecord {
    /// Schedules a meeting.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyText`] when the title is blank.
    pub fn schedule(
        title: impl Into<String>,
        team: TeamName,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Self, RecordDomainError> {
        Ok(Self {
            id: RecordId::new(),
            title: required_text("title", title)?,
            date,
            time,
            team,
            attendees: BTreeSet::new(),
            status: MeetingStatus::Scheduled,
            agenda: Vec::new(),
            minutes: None,
        })
    }

    /// Replaces the identifier, for records restored from storage.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: MeetingStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds attendees. Duplicate names collapse.
    #[must_use]
    pub fn with_attendees(mut self, attendees: impl IntoIterator<Item = String>) -> Self {
        self.attendees.extend(attendees);
        self
    }

    /// Appends agenda items in order, skipping blank entries.
    #[must_use]
    pub fn with_agenda(mut self, items: impl IntoIterator<Item = String>) -> Self {
        self.agenda
            .extend(items.into_iter().filter(|item| !item.trim().is_empty()));
        self
    }

    /// Records minutes. Blank text clears them.
    #[must_use]
    pub fn with_minutes(mut self, minutes: impl Into<String>) -> Self {
        let text = minutes.into();
        self.minutes = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the meeting date.
    #[must_use]
    pub const fn meeting_date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the attendee names.
    #[must_use]
    pub const fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Returns the agenda in order.
    #[must_use]
    pub fn agenda(&self) -> &[String] {
        &self.agenda
    }

    /// Returns the minutes, if recorded.
    #[must_use]
    pub fn minutes(&self) -> Option<&str> {
        self.minutes.as_deref()
    }
}

impl Record for MeetingRecord {
    type Status = MeetingStatus;
    type SearchField = MeetingSearchField;
    type DateField = MeetingDateField;

    const KIND: EntityKind = EntityKind::Meeting;
    const DEFAULT_SEARCH_FIELDS: &'static [MeetingSearchField] =
        &[MeetingSearchField::Title, MeetingSearchField::Agenda];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn team(&self) -> &TeamName {
        &self.team
    }

    fn status(&self) -> MeetingStatus {
        self.status
    }

    fn set_status(&mut self, status: MeetingStatus) {
        self.status = status;
    }

    fn search_text(&self, field: MeetingSearchField) -> Vec<&str> {
        match field {
            MeetingSearchField::Title => vec![self.title.as_str()],
            MeetingSearchField::Agenda => self.agenda.iter().map(String::as_str).collect(),
            MeetingSearchField::Minutes => self.minutes.as_deref().into_iter().collect(),
        }
    }

    fn date(&self, field: MeetingDateField) -> NaiveDateTime {
        match field {
            MeetingDateField::ScheduledAt => self.date.and_time(self.time),
        }
    }
}
