//! Per-ticker report pipeline.
//!
//! One call per ticker: fetch the five statements, normalize four of
//! them, derive the metric panel, and assemble the report. Each call is
//! independent — a failed ticker never poisons the rest of a run.

use moat::data::alpha::AlphaVantageClient;
use moat::data::{Cadence, NormalizedTable, StatementKind, normalize};
use moat::metrics::{MetricsEngine, MetricsTable};
use moat::output::{ExportFormat, ReportBuilder, write_report};
use std::path::{Path, PathBuf};

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    /// Fetch or normalization error.
    #[error("data error: {0}")]
    Data(#[from] moat::data::DataError),
    /// Metric derivation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] moat::metrics::MetricsError),
    /// Report export error.
    #[error("export error: {0}")]
    Export(#[from] moat::output::ExportError),
}

/// Configuration for a report run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunConfig {
    /// Number of reporting periods to fetch.
    pub periods: usize,
    /// Annual or quarterly reports.
    pub cadence: Cadence,
    /// Artifact format.
    pub format: ExportFormat,
}

/// The three normalized statements the metrics engine consumes, plus the
/// pass-through sections.
struct TickerStatements {
    overview: std::collections::BTreeMap<String, String>,
    cash: NormalizedTable,
    income: NormalizedTable,
    balance: NormalizedTable,
    earnings: NormalizedTable,
}

async fn fetch_statements(
    client: &AlphaVantageClient,
    symbol: &str,
    config: RunConfig,
) -> Result<TickerStatements, PipelineError> {
    let overview = client.overview(symbol).await?;
    let cash = client
        .cash_flow(symbol, config.periods, config.cadence)
        .await?;
    let income = client
        .income_statement(symbol, config.periods, config.cadence)
        .await?;
    let balance = client
        .balance_sheet(symbol, config.periods, config.cadence)
        .await?;
    let earnings = client
        .earnings(symbol, config.periods, config.cadence)
        .await?;

    Ok(TickerStatements {
        overview,
        cash: normalize(&cash)?,
        income: normalize(&income)?,
        balance: normalize(&balance)?,
        earnings: normalize(&earnings)?,
    })
}

/// Run the full pipeline for one ticker and write its report artifact.
/// Returns the artifact path.
pub(crate) async fn run_ticker(
    client: &AlphaVantageClient,
    symbol: &str,
    out_dir: &Path,
    config: RunConfig,
) -> Result<PathBuf, PipelineError> {
    let statements = fetch_statements(client, symbol, config).await?;

    let metrics = MetricsEngine::new().compute(
        &statements.income,
        &statements.balance,
        &statements.cash,
    )?;

    let report = ReportBuilder::new()
        .symbol(symbol.to_uppercase())
        .metrics(&metrics)
        .overview(&statements.overview)
        .statement(StatementKind::CashFlow, &statements.cash)
        .statement(StatementKind::Income, &statements.income)
        .statement(StatementKind::BalanceSheet, &statements.balance)
        .statement(StatementKind::Earnings, &statements.earnings)
        .build();

    Ok(write_report(out_dir, &report, config.format)?)
}

/// Fetch and derive just the metric panel for one ticker.
pub(crate) async fn ticker_metrics(
    client: &AlphaVantageClient,
    symbol: &str,
    config: RunConfig,
) -> Result<MetricsTable, PipelineError> {
    let statements = fetch_statements(client, symbol, config).await?;

    Ok(MetricsEngine::new().compute(
        &statements.income,
        &statements.balance,
        &statements.cash,
    )?)
}
