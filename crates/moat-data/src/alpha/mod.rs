//! Alpha Vantage fundamentals provider.
//!
//! A rate-limited client for the provider's fundamentals endpoints:
//! company overview, cash flow, income statement, balance sheet, and
//! earnings history, each returned as one record per reporting period.

pub mod client;
pub mod fundamentals;

pub use client::AlphaVantageClient;
pub use fundamentals::{promote_header_row, reports_to_statement};
