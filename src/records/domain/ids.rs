//! Identifier and validated scalar types shared by all records.

use super::RecordDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a dashboard record.
///
/// Stored records carry opaque client-generated ids, often millisecond
/// timestamps such as `"1705312800000"`. Records created here get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new random record identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a record identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Wraps a stored identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyText`] when the value is blank.
    pub fn parse(value: impl Into<String>) -> Result<Self, RecordDomainError> {
        required_text("id", value).map(Self)
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a team as entered on the record.
///
/// The original spelling is preserved for rendering. Comparisons go through
/// [`TeamName::matches`], which is the only team-matching rule in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Creates a validated team name.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyTeamName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecordDomainError::EmptyTeamName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the team name as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact comparison, ignoring surrounding whitespace.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.canonical_key() == canonical_team_key(other)
    }

    /// Returns the normalised key used for team comparisons.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        canonical_team_key(&self.0)
    }
}

fn canonical_team_key(value: &str) -> String {
    value.trim().to_lowercase()
}

impl TryFrom<String> for TeamName {
    type Error = RecordDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(value: TeamName) -> Self {
        value.0
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the trimmed text, or an error naming the empty field.
pub(crate) fn required_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, RecordDomainError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecordDomainError::EmptyText(field));
    }
    Ok(trimmed.to_owned())
}
