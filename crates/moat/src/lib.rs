#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moat-labs/moat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod watchlist;

// Re-export main types from sub-crates
pub use moat_data as data;
pub use moat_metrics as metrics;
pub use moat_output as output;

// Re-export common pipeline types
pub use moat_data::{Cadence, NormalizedTable, Period, RawStatement, StatementKind, normalize};
pub use moat_metrics::{METRIC_ORDER, Metric, MetricValue, MetricsEngine, MetricsTable};
pub use moat_output::{ExportFormat, Exporter, TickerReport, write_report};
pub use watchlist::Watchlist;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
