#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moat-labs/moat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;

pub use export::{ExportError, ExportFormat, Exporter, write_report};
pub use report::{ReportBuilder, ReportSection, SECTION_ORDER, TickerReport};
