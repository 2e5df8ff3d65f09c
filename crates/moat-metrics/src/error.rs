//! Error types for metric computation.

use crate::table::Metric;
use moat_data::Period;
use thiserror::Error;

/// Result type for metric computation.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Errors that can occur while deriving metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Input statements disagree on the reporting-period sequence.
    #[error("period sequences disagree between {left} and {right}: {detail}")]
    PeriodMismatch {
        /// Name of the first statement compared
        left: &'static str,
        /// Name of the second statement compared
        right: &'static str,
        /// Description of the disagreement
        detail: String,
    },

    /// A required field is absent from a normalized statement.
    #[error("required field {field:?} missing from {statement} statement")]
    MissingField {
        /// Statement the field was expected in
        statement: &'static str,
        /// Name of the missing field
        field: String,
    },

    /// A metric's denominator is exactly zero for some period.
    #[error("division by zero computing {metric} for period {period}")]
    DivisionByZero {
        /// Metric being computed
        metric: Metric,
        /// Period the zero denominator occurred in
        period: Period,
    },
}
