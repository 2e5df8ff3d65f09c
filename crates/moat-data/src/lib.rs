#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moat-labs/moat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod alpha;
pub mod error;
pub mod statement;

pub use error::{DataError, Result};
pub use statement::{
    Cadence, NormalizedTable, Period, RawStatement, StatementKind, normalize, parse_raw_value,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
