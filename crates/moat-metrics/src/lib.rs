#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moat-labs/moat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod fcf;
pub mod fields;
pub mod margins;
pub mod roiic;
pub mod rota;
pub mod table;
pub mod value;

pub use engine::MetricsEngine;
pub use error::{MetricsError, Result};
pub use table::{METRIC_ORDER, Metric, MetricsTable};
pub use value::MetricValue;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
