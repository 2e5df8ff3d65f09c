//! The derived metrics table.

use crate::value::MetricValue;
use moat_data::Period;
use serde::{Serialize, Serializer};
use std::fmt;

/// The derived metrics, in their fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Gross profit over total revenue
    GrossMargin,
    /// Operating income over total revenue
    OperatingMargin,
    /// Return on incremental invested capital
    Roiic,
    /// Return on total assets, net of intangibles, goodwill, and most cash
    Rota,
    /// Free cash flow
    Fcf,
}

impl Metric {
    /// Row label used in report output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GrossMargin => "Gross Margin",
            Self::OperatingMargin => "Operating Margin",
            Self::Roiic => "ROIIC",
            Self::Rota => "ROTA",
            Self::Fcf => "FCF",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Row order of every metrics table, regardless of computation order.
pub const METRIC_ORDER: [Metric; 5] = [
    Metric::GrossMargin,
    Metric::OperatingMargin,
    Metric::Roiic,
    Metric::Rota,
    Metric::Fcf,
];

/// The derived metrics table: an ordered sequence of periods (oldest
/// first) against one row per metric, rows always in [`METRIC_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsTable {
    periods: Vec<Period>,
    rows: Vec<(Metric, Vec<MetricValue>)>,
}

impl MetricsTable {
    /// Assemble a table from per-metric columns, reordering rows into
    /// [`METRIC_ORDER`] no matter what order they were computed in.
    pub(crate) fn assemble(
        periods: Vec<Period>,
        mut columns: Vec<(Metric, Vec<MetricValue>)>,
    ) -> Self {
        columns.sort_by_key(|(metric, _)| METRIC_ORDER.iter().position(|o| o == metric));
        Self {
            periods,
            rows: columns,
        }
    }

    /// The period sequence, oldest first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of reporting periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the table has no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// All rows, in [`METRIC_ORDER`].
    pub fn rows(&self) -> &[(Metric, Vec<MetricValue>)] {
        &self.rows
    }

    /// A single metric's values, one per period.
    pub fn row(&self, metric: Metric) -> Option<&[MetricValue]> {
        self.rows
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, values)| values.as_slice())
    }
}
