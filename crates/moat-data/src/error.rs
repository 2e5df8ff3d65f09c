//! Error types for data operations.

use crate::statement::Period;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// A raw value did not match the numeric/suffix/null-marker shape.
    #[error("malformed value {value:?} in field {field:?}")]
    MalformedValue {
        /// Field the value was read from
        field: String,
        /// The offending raw value
        value: String,
    },

    /// A field present in other periods is absent from one of them.
    #[error("field {field:?} is missing for period {period}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Period the field is missing from
        period: Period,
    },

    /// A column's length disagrees with the table's period count.
    #[error("column {field:?} has {got} values, table has {expected} periods")]
    ColumnShape {
        /// Name of the offending column
        field: String,
        /// Number of periods in the table
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// Invalid ticker symbol
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Data provider API error
    #[error("provider API error: {0}")]
    ProviderApi(String),

    /// The provider declined the request due to call-frequency limits
    #[error("provider rate limit: {0}")]
    RateLimited(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
