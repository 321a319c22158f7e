//! Error taxonomy for list aggregation.

use crate::records::domain::{RecordId, RecordStateError};
use thiserror::Error;

/// Errors returned by aggregator operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregationError {
    /// A filter criterion names no value of the field's closed enumeration.
    #[error("invalid {field} filter value: {value:?}")]
    InvalidFilterValue {
        /// Filtered field.
        field: &'static str,
        /// Rejected criterion.
        value: String,
    },

    /// An ingested record holds a value outside its domain.
    #[error(transparent)]
    InvalidRecordState(#[from] RecordStateError),

    /// An estimated cost could not be parsed as a currency amount.
    #[error("record {record} has malformed estimated cost {value:?}")]
    MalformedCurrency {
        /// Offending record.
        record: RecordId,
        /// Cost text as entered.
        value: String,
    },

    /// The total cost does not fit the amount type.
    #[error("total cost exceeds the representable range")]
    CostOverflow,
}

impl AggregationError {
    /// Builds an [`AggregationError::InvalidFilterValue`].
    #[must_use]
    pub fn invalid_filter(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFilterValue {
            field,
            value: value.into(),
        }
    }
}

/// Result type for aggregator operations.
pub type AggregationResult<T> = Result<T, AggregationError>;
