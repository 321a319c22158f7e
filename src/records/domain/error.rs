//! Error types for record construction, enum parsing, and row ingestion.

use thiserror::Error;

/// Errors returned while constructing domain record values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordDomainError {
    /// A title or item name is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyText(&'static str),

    /// The team name is empty after trimming.
    #[error("team name must not be empty")]
    EmptyTeamName,

    /// Requested quantities must be positive.
    #[error("invalid quantity {0}, expected a positive integer")]
    InvalidQuantity(u32),

    /// Comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyComment,

    /// Inventory bounds are inverted.
    #[error("minimum stock {min} exceeds maximum stock {max}")]
    InvertedStockBounds {
        /// Configured minimum stock.
        min: u32,
        /// Configured maximum stock.
        max: u32,
    },
}

/// Error returned while parsing a closed enumeration value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {field}: {value}")]
pub struct ParseEnumError {
    /// Name of the enumerated field (`status`, `priority`, ...).
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    /// Creates a parse error for the given field and raw input.
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// A wire record whose field value falls outside its domain.
///
/// Raised during ingestion so bad rows never reach grouped views.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record {record_id} has invalid {field}: {value:?}")]
pub struct RecordStateError {
    /// Identifier of the offending row as supplied by the source.
    pub record_id: String,
    /// Field that failed validation.
    pub field: &'static str,
    /// The rejected raw value.
    pub value: String,
}

impl RecordStateError {
    /// Creates a record state error.
    #[must_use]
    pub fn new(
        record_id: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            field,
            value: value.into(),
        }
    }
}

/// Error returned while parsing currency text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed currency amount: {0:?}")]
pub struct ParseCurrencyError(pub String);
