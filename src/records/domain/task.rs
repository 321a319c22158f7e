//! Team task record and its status lifecycle.

use super::{
    ClosedEnum, EntityKind, ParseEnumError, Priority, Record, RecordDomainError, RecordId,
    RecordStatus, TeamName, ids::required_text,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    ToDo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl ClosedEnum for TaskStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[Self::ToDo, Self::InProgress, Self::Done];

    fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl RecordStatus for TaskStatus {
    const WORK_QUEUE_ORDER: &'static [Self] = &[Self::InProgress, Self::ToDo, Self::Done];

    fn is_complete(self) -> bool {
        self == Self::Done
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// A dated note left on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author: String,
    text: String,
    date: NaiveDate,
}

impl Comment {
    /// Creates a comment dated today.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyComment`] when the text is blank.
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, RecordDomainError> {
        Self::dated(author, text, clock.utc().date_naive())
    }

    /// Creates a comment with an explicit date.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyComment`] when the text is blank.
    pub fn dated(
        author: impl Into<String>,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, RecordDomainError> {
        let raw = text.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecordDomainError::EmptyComment);
        }
        Ok(Self {
            author: author.into(),
            text: trimmed.to_owned(),
            date,
        })
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the comment date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Searchable task text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSearchField {
    /// Task title.
    Title,
    /// Free-form description.
    Description,
    /// Assignee name.
    Assignee,
}

/// Sortable task date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskDateField {
    /// Due date.
    DueDate,
    /// Creation timestamp.
    CreatedAt,
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    priority: Priority,
    assignee: Option<String>,
    team: TeamName,
    due_date: NaiveDate,
}

impl NewTask {
    /// Creates task input with the required fields and medium priority.
    #[must_use]
    pub fn new(title: impl Into<String>, team: TeamName, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            assignee: None,
            team,
            due_date,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: RecordId,
    /// Stored title.
    pub title: String,
    /// Stored description.
    pub description: String,
    /// Stored status.
    pub status: TaskStatus,
    /// Stored priority.
    pub priority: Priority,
    /// Stored assignee, if any.
    pub assignee: Option<String>,
    /// Owning team.
    pub team: TeamName,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Comments in posting order.
    pub comments: Vec<Comment>,
}

/// A unit of team work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: RecordId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: Priority,
    assignee: Option<String>,
    team: TeamName,
    due_date: NaiveDate,
    created_at: DateTime<Utc>,
    comments: Vec<Comment>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::ToDo`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyText`] when the title is blank.
    pub fn create(input: NewTask, clock: &impl Clock) -> Result<Self, RecordDomainError> {
        Ok(Self {
            id: RecordId::new(),
            title: required_text("title", input.title)?,
            description: input.description,
            status: TaskStatus::ToDo,
            priority: input.priority,
            assignee: input.assignee,
            team: input.team,
            due_date: input.due_date,
            created_at: clock.utc(),
            comments: Vec::new(),
        })
    }

    /// Reconstructs a task from stored data.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyText`] when the title is blank.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, RecordDomainError> {
        Ok(Self {
            id: data.id,
            title: required_text("title", data.title)?,
            description: data.description,
            status: data.status,
            priority: data.priority,
            assignee: data.assignee,
            team: data.team,
            due_date: data.due_date,
            created_at: data.created_at,
            comments: data.comments,
        })
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns comments in posting order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Appends a comment.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Record for Task {
    type Status = TaskStatus;
    type SearchField = TaskSearchField;
    type DateField = TaskDateField;

    const KIND: EntityKind = EntityKind::Task;
    const DEFAULT_SEARCH_FIELDS: &'static [TaskSearchField] =
        &[TaskSearchField::Title, TaskSearchField::Description];
    const CARRIES_PRIORITY: bool = true;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn team(&self) -> &TeamName {
        &self.team
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn search_text(&self, field: TaskSearchField) -> Vec<&str> {
        match field {
            TaskSearchField::Title => vec![self.title.as_str()],
            TaskSearchField::Description => vec![self.description.as_str()],
            TaskSearchField::Assignee => self.assignee.as_deref().into_iter().collect(),
        }
    }

    fn date(&self, field: TaskDateField) -> NaiveDateTime {
        match field {
            TaskDateField::DueDate => self.due_date.and_time(chrono::NaiveTime::MIN),
            TaskDateField::CreatedAt => self.created_at.naive_utc(),
        }
    }
}
