//! Per-ticker report assembly.

use chrono::{DateTime, Utc};
use moat_data::{NormalizedTable, Period, StatementKind};
use moat_metrics::MetricsTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Section order in every report artifact.
pub const SECTION_ORDER: [&str; 6] = ["metrics", "overview", "cash", "income", "balance", "earnings"];

/// A rendered tabular section of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section name (one of [`SECTION_ORDER`])
    pub title: String,
    /// Column labels, starting with the row-label column
    pub header: Vec<String>,
    /// Data rows, each as long as the header
    pub rows: Vec<Vec<String>>,
}

impl ReportSection {
    /// Render the derived metrics table: one row per metric, in the
    /// table's fixed row order, one column per period.
    pub fn from_metrics(table: &MetricsTable) -> Self {
        let mut header = vec!["metric".to_string()];
        header.extend(table.periods().iter().map(|p| p.as_str().to_string()));

        let rows = table
            .rows()
            .iter()
            .map(|(metric, values)| {
                let mut row = vec![metric.name().to_string()];
                row.extend(values.iter().map(ToString::to_string));
                row
            })
            .collect();

        Self {
            title: "metrics".to_string(),
            header,
            rows,
        }
    }

    /// Render a normalized statement: one row per field (integer columns
    /// first, then the text passthrough columns), one column per period.
    pub fn from_statement(kind: StatementKind, table: &NormalizedTable) -> Self {
        let mut header = vec!["field".to_string()];
        header.extend(table.periods().iter().map(Period::to_string));

        let mut rows: Vec<Vec<String>> = Vec::new();
        for field in table.numeric_fields() {
            let mut row = vec![field.to_string()];
            row.extend(
                table
                    .column(field)
                    .unwrap_or_default()
                    .iter()
                    .map(ToString::to_string),
            );
            rows.push(row);
        }
        for field in table.text_fields() {
            let mut row = vec![field.to_string()];
            row.extend(table.text_column(field).unwrap_or_default().iter().cloned());
            rows.push(row);
        }

        Self {
            title: kind.as_str().to_string(),
            header,
            rows,
        }
    }

    /// Render the company overview as key/value rows, passed through
    /// verbatim.
    pub fn from_overview(overview: &BTreeMap<String, String>) -> Self {
        Self {
            title: "overview".to_string(),
            header: vec!["field".to_string(), "value".to_string()],
            rows: overview
                .iter()
                .map(|(k, v)| vec![k.clone(), v.clone()])
                .collect(),
        }
    }
}

/// A complete per-ticker report: the metric panel plus the pass-through
/// statement sections, ordered as [`SECTION_ORDER`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerReport {
    /// Ticker symbol the report covers.
    pub symbol: String,

    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// Report sections, in [`SECTION_ORDER`].
    pub sections: Vec<ReportSection>,
}

impl TickerReport {
    /// Create a report, reordering sections into [`SECTION_ORDER`].
    pub fn new(symbol: String, mut sections: Vec<ReportSection>) -> Self {
        sections.sort_by_key(|s| {
            SECTION_ORDER
                .iter()
                .position(|name| *name == s.title)
                .unwrap_or(SECTION_ORDER.len())
        });

        Self {
            symbol,
            generated_at: Utc::now(),
            sections,
        }
    }

    /// A section by name.
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Builder for creating per-ticker reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    symbol: Option<String>,
    sections: Vec<ReportSection>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticker symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Add the derived metrics section.
    pub fn metrics(mut self, table: &MetricsTable) -> Self {
        self.sections.push(ReportSection::from_metrics(table));
        self
    }

    /// Add the company overview section.
    pub fn overview(mut self, overview: &BTreeMap<String, String>) -> Self {
        self.sections.push(ReportSection::from_overview(overview));
        self
    }

    /// Add a normalized statement section.
    pub fn statement(mut self, kind: StatementKind, table: &NormalizedTable) -> Self {
        self.sections.push(ReportSection::from_statement(kind, table));
        self
    }

    /// Build the report.
    pub fn build(self) -> TickerReport {
        TickerReport::new(self.symbol.unwrap_or_default(), self.sections)
    }
}
