//! Financial statement model.
//!
//! This module provides the types flowing through the report pipeline:
//! reporting periods, raw statements as returned by the data provider,
//! and normalized integer tables, together with the normalizer that
//! converts raw statements into tables.

pub mod normalize;
pub mod table;

pub use normalize::{normalize, parse_raw_value};
pub use table::NormalizedTable;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A fiscal reporting period, identified by the provider's period label.
///
/// Labels are ISO fiscal end dates (`"2023-09-30"`), so ordering by label
/// is chronological. Periods are the alignment key across statements.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period(String);

impl Period {
    /// Create a period from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The period label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Period {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// The statement sections fetched per ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Company overview (passed through to reports verbatim)
    Overview,
    /// Cash flow statement
    CashFlow,
    /// Income statement
    Income,
    /// Balance sheet
    BalanceSheet,
    /// Earnings history
    Earnings,
}

impl StatementKind {
    /// Section name used in report artifacts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::CashFlow => "cash",
            Self::Income => "income",
            Self::BalanceSheet => "balance",
            Self::Earnings => "earnings",
        }
    }

    /// All statement kinds, in report section order.
    pub const fn all() -> [Self; 5] {
        [
            Self::Overview,
            Self::CashFlow,
            Self::Income,
            Self::BalanceSheet,
            Self::Earnings,
        ]
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting cadence for statement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cadence {
    /// Annual reports (10-K style)
    Annual,
    /// Quarterly reports (10-Q style)
    Quarterly,
}

impl Cadence {
    /// JSON key holding the statement reports at this cadence.
    pub const fn reports_key(&self) -> &'static str {
        match self {
            Self::Annual => "annualReports",
            Self::Quarterly => "quarterlyReports",
        }
    }

    /// JSON key holding the earnings rows at this cadence.
    pub const fn earnings_key(&self) -> &'static str {
        match self {
            Self::Annual => "annualEarnings",
            Self::Quarterly => "quarterlyEarnings",
        }
    }
}

/// A raw statement as fetched from the data provider: an ordered map from
/// reporting period to field name to raw value string.
///
/// Values are unparsed provider output — suffix-scaled numbers (`"1.5B"`),
/// plain numbers, the `"None"` null marker, or the currency passthrough.
/// Read-only input to [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatement {
    rows: BTreeMap<Period, BTreeMap<String, String>>,
}

impl RawStatement {
    /// Create an empty raw statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single field value for a period.
    pub fn insert(&mut self, period: Period, field: impl Into<String>, value: impl Into<String>) {
        self.rows
            .entry(period)
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Insert a full record for a period, replacing any existing record.
    pub fn insert_record(&mut self, period: Period, record: BTreeMap<String, String>) {
        self.rows.insert(period, record);
    }

    /// Records keyed by period, oldest first.
    pub const fn records(&self) -> &BTreeMap<Period, BTreeMap<String, String>> {
        &self.rows
    }

    /// Periods present in the statement, oldest first.
    pub fn periods(&self) -> impl Iterator<Item = &Period> {
        self.rows.keys()
    }

    /// Number of reporting periods.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the statement has no periods.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_ordering_is_chronological_for_iso_labels() {
        let mut periods = vec![
            Period::from("2023-09-30"),
            Period::from("2021-09-30"),
            Period::from("2022-09-30"),
        ];
        periods.sort();

        assert_eq!(periods[0].as_str(), "2021-09-30");
        assert_eq!(periods[2].as_str(), "2023-09-30");
    }

    #[test]
    fn test_raw_statement_iterates_oldest_first() {
        let mut raw = RawStatement::new();
        raw.insert(Period::from("2023-09-30"), "totalRevenue", "300");
        raw.insert(Period::from("2021-09-30"), "totalRevenue", "100");
        raw.insert(Period::from("2022-09-30"), "totalRevenue", "200");

        let labels: Vec<&str> = raw.periods().map(Period::as_str).collect();
        assert_eq!(labels, vec!["2021-09-30", "2022-09-30", "2023-09-30"]);
    }

    #[test]
    fn test_statement_kind_section_names() {
        assert_eq!(StatementKind::Overview.as_str(), "overview");
        assert_eq!(StatementKind::CashFlow.as_str(), "cash");
        assert_eq!(StatementKind::BalanceSheet.as_str(), "balance");
    }

    #[test]
    fn test_cadence_keys() {
        assert_eq!(Cadence::Annual.reports_key(), "annualReports");
        assert_eq!(Cadence::Quarterly.earnings_key(), "quarterlyEarnings");
    }
}
