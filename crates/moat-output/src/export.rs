//! Export functionality for per-ticker reports.
//!
//! Reports export as CSV (one file per section) or JSON (one document per
//! ticker). CSV is the spreadsheet-friendly shape; JSON round-trips the
//! full report.

use crate::report::{ReportSection, TickerReport};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for ReportSection {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(&self.header)?;
                for row in &self.rows {
                    wtr.write_record(row)?;
                }
                let data =
                    String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?).unwrap();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for TickerReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut output = String::new();
                output.push_str(&format!("# Ticker: {}\n", self.symbol));
                output.push_str(&format!("# Generated: {}\n", self.generated_at));

                for section in &self.sections {
                    output.push_str(&format!("\n# {}\n", section.title));
                    output.push_str(&section.export_to_string(ExportFormat::Csv)?);
                }
                Ok(output)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Write a report under `dir` as one artifact per ticker.
///
/// CSV produces a `<SYMBOL>/` directory with one `<section>.csv` per
/// section; JSON produces a single `<SYMBOL>.json`. Returns the artifact
/// path.
pub fn write_report(
    dir: &Path,
    report: &TickerReport,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;

    match format {
        ExportFormat::Csv => {
            let report_dir = dir.join(&report.symbol);
            std::fs::create_dir_all(&report_dir)?;
            for section in &report.sections {
                let path = report_dir.join(format!("{}.csv", section.title));
                section.export_to_file(&path, ExportFormat::Csv)?;
            }
            Ok(report_dir)
        }
        ExportFormat::Json | ExportFormat::PrettyJson => {
            let path = dir.join(format!("{}.{}", report.symbol, format.extension()));
            report.export_to_file(&path, format)?;
            Ok(path)
        }
    }
}
