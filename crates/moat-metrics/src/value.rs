//! Metric cell values.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single metric value: a number or a categorical sentinel.
///
/// Sentinels substitute for degenerate ratios — `Negative` when operating
/// income shrank, `Infinite` when incremental capital was negative, and
/// `NotApplicable` for the earliest period of a recurrence, which has no
/// prior period to compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// A percentage
    Percent(f64),
    /// A cash amount
    Amount(f64),
    /// Period-over-period growth was negative
    Negative,
    /// Incremental invested capital was negative
    Infinite,
    /// No value is defined for this period
    NotApplicable,
}

impl MetricValue {
    /// The numeric value, if this cell is numeric.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Percent(v) | Self::Amount(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this cell is a categorical sentinel rather than a number.
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Negative | Self::Infinite | Self::NotApplicable)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(v) | Self::Amount(v) => write!(f, "{v}"),
            Self::Negative => f.write_str("negative"),
            Self::Infinite => f.write_str("infinite"),
            Self::NotApplicable => f.write_str("n/a"),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Percent(v) | Self::Amount(v) => serializer.serialize_f64(*v),
            Self::Negative => serializer.serialize_str("negative"),
            Self::Infinite => serializer.serialize_str("infinite"),
            Self::NotApplicable => serializer.serialize_str("n/a"),
        }
    }
}

/// Round a ratio to 4 decimal places.
///
/// Margins and ROTA round the raw ratio BEFORE the ×100 percentage
/// scaling; ROIIC rounds the scaled percentage. The two orders diverge in
/// the last digit, so each metric applies its own at the right point.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
