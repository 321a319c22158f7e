//! Conversion contract from wire rows to validated records.

use crate::records::domain::{Record, RecordStateError};

/// A record type that can be ingested from a wire row.
pub trait FromRow: Record {
    /// Wire representation.
    type Row: std::fmt::Debug + Send + 'static;

    /// Returns the row identifier for error reporting.
    fn row_id(row: &Self::Row) -> &str;

    /// Converts a row into a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStateError`] naming the first field outside its domain.
    fn from_row(row: Self::Row) -> Result<Self, RecordStateError>;
}
