//! moat CLI binary.
//!
//! Generates per-ticker financial-statement health reports.

mod integration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use integration::report_pipeline::{RunConfig, run_ticker, ticker_metrics};
use moat::data::alpha::AlphaVantageClient;
use moat::watchlist::Watchlist;
use moat::{Cadence, ExportFormat, MetricsTable};
use std::path::PathBuf;
use std::process;

/// Environment variable consulted when `--api-key` is not passed.
const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

#[derive(Parser)]
#[command(name = "moat")]
#[command(about = "moat: financial-statement health reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate report artifacts for a set of tickers
    Report {
        /// Ticker symbols
        symbols: Vec<String>,

        /// Read additional symbols from a watchlist file (one per line)
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Number of reporting periods to fetch
        #[arg(long, default_value = "15")]
        periods: usize,

        /// Use quarterly instead of annual reports
        #[arg(long)]
        quarterly: bool,

        /// Output directory
        #[arg(long, default_value = "reports")]
        out: PathBuf,

        /// Output format (csv, json, or pretty-json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Alpha Vantage API key (defaults to ALPHAVANTAGE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Compute and print the metrics table for a single ticker
    Metrics {
        /// Ticker symbol
        symbol: String,

        /// Number of reporting periods to fetch
        #[arg(long, default_value = "15")]
        periods: usize,

        /// Use quarterly instead of annual reports
        #[arg(long)]
        quarterly: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Alpha Vantage API key (defaults to ALPHAVANTAGE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            symbols,
            watchlist,
            periods,
            quarterly,
            out,
            format,
            api_key,
        } => {
            let mut list = Watchlist::new(&symbols);
            if let Some(path) = watchlist {
                for symbol in Watchlist::from_file(&path)?.symbols() {
                    list.add(symbol);
                }
            }
            if list.is_empty() {
                return Err("no symbols given: pass tickers or --watchlist".into());
            }

            let config = RunConfig {
                periods,
                cadence: cadence(quarterly),
                format: parse_export_format(&format)?,
            };
            generate_reports(&list, &out, config, api_key).await
        }
        Commands::Metrics {
            symbol,
            periods,
            quarterly,
            format,
            api_key,
        } => {
            let config = RunConfig {
                periods,
                cadence: cadence(quarterly),
                format: ExportFormat::Csv,
            };
            print_metrics(&symbol, config, &format, api_key).await
        }
    }
}

async fn generate_reports(
    watchlist: &Watchlist,
    out: &std::path::Path,
    config: RunConfig,
    api_key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = AlphaVantageClient::new(resolve_api_key(api_key)?)?;

    println!(
        "Generating {} report(s) into {} ({} periods, {:?})",
        watchlist.size(),
        out.display(),
        config.periods,
        config.cadence
    );

    let progress = ProgressBar::new(watchlist.size() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .expect("valid progress template"),
    );

    let mut failures = 0usize;
    for symbol in watchlist.symbols() {
        progress.set_message(symbol.clone());
        match run_ticker(&client, symbol, out, config).await {
            Ok(path) => progress.println(format!("  ✓ {} → {}", symbol, path.display())),
            Err(e) => {
                failures += 1;
                progress.println(format!("  ✗ {}: {}", symbol, e));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!(
        "Done: {} succeeded, {} failed",
        watchlist.size() - failures,
        failures
    );
    Ok(())
}

async fn print_metrics(
    symbol: &str,
    config: RunConfig,
    format: &str,
    api_key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = AlphaVantageClient::new(resolve_api_key(api_key)?)?;
    let table = ticker_metrics(&client, symbol, config).await?;

    match format {
        "text" => print!("{}", render_metrics_text(&table)),
        "json" => println!("{}", serde_json::to_string_pretty(&table)?),
        other => return Err(format!("unknown format {other:?} (use text or json)").into()),
    }
    Ok(())
}

/// Render the metrics table with one row per metric and one column per
/// period, oldest first.
fn render_metrics_text(table: &MetricsTable) -> String {
    const LABEL_WIDTH: usize = 18;
    const CELL_WIDTH: usize = 14;

    let mut output = String::new();

    output.push_str(&format!("{:<LABEL_WIDTH$}", "metric"));
    for period in table.periods() {
        output.push_str(&format!("{:>CELL_WIDTH$}", period.as_str()));
    }
    output.push('\n');

    for (metric, values) in table.rows() {
        output.push_str(&format!("{:<LABEL_WIDTH$}", metric.name()));
        for value in values {
            output.push_str(&format!("{:>CELL_WIDTH$}", value.to_string()));
        }
        output.push('\n');
    }

    output
}

const fn cadence(quarterly: bool) -> Cadence {
    if quarterly {
        Cadence::Quarterly
    } else {
        Cadence::Annual
    }
}

fn parse_export_format(format: &str) -> Result<ExportFormat, String> {
    match format {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        "pretty-json" => Ok(ExportFormat::PrettyJson),
        other => Err(format!(
            "unknown format {other:?} (use csv, json, or pretty-json)"
        )),
    }
}

fn resolve_api_key(api_key: Option<String>) -> Result<String, String> {
    api_key
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| format!("missing API key: pass --api-key or set {API_KEY_ENV}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use moat::data::{Period, RawStatement, normalize};
    use moat::metrics::MetricsEngine;

    #[test]
    fn test_parse_export_format() {
        assert!(matches!(parse_export_format("csv"), Ok(ExportFormat::Csv)));
        assert!(matches!(
            parse_export_format("pretty-json"),
            Ok(ExportFormat::PrettyJson)
        ));
        assert!(parse_export_format("xlsx").is_err());
    }

    #[test]
    fn test_cadence_flag() {
        assert_eq!(cadence(false), Cadence::Annual);
        assert_eq!(cadence(true), Cadence::Quarterly);
    }

    #[test]
    fn test_render_metrics_text_lists_panel_rows() {
        let mut income = RawStatement::new();
        let mut balance = RawStatement::new();
        let mut cash = RawStatement::new();
        for period in ["2022-09-30", "2023-09-30"] {
            let p = Period::from(period);
            income.insert(p.clone(), "grossProfit", "60");
            income.insert(p.clone(), "totalRevenue", "200");
            income.insert(p.clone(), "operatingIncome", "40");
            income.insert(p.clone(), "depreciationAndAmortization", "10");
            balance.insert(p.clone(), "totalAssets", "1000");
            balance.insert(p.clone(), "intangibleAssets", "0");
            balance.insert(p.clone(), "goodwill", "0");
            balance.insert(p.clone(), "cashAndCashEquivalentsAtCarryingValue", "0");
            cash.insert(p.clone(), "operatingCashflow", "90");
            cash.insert(p.clone(), "capitalExpenditures", "50");
            cash.insert(p.clone(), "depreciationDepletionAndAmortization", "10");
            cash.insert(p.clone(), "changeInOperatingAssets", "0");
            cash.insert(p, "changeInOperatingLiabilities", "0");
        }

        let table = MetricsEngine::new()
            .compute(
                &normalize(&income).unwrap(),
                &normalize(&balance).unwrap(),
                &normalize(&cash).unwrap(),
            )
            .unwrap();

        let text = render_metrics_text(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("2022-09-30"));
        assert!(lines[1].starts_with("Gross Margin"));
        assert!(lines[3].starts_with("ROIIC"));
        assert!(lines[3].contains("n/a"));
        assert!(lines[5].starts_with("FCF"));
    }
}
