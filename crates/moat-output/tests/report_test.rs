//! Integration tests for report assembly over the full pipeline:
//! raw statements → normalization → metrics → report sections → export.

use moat_data::{Period, RawStatement, StatementKind, normalize};
use moat_metrics::MetricsEngine;
use moat_output::{ExportFormat, Exporter, ReportBuilder, SECTION_ORDER, write_report};
use std::collections::BTreeMap;

const PERIODS: [&str; 3] = ["2021-09-30", "2022-09-30", "2023-09-30"];

fn income_statement() -> RawStatement {
    let mut raw = RawStatement::new();
    for (period, revenue, gross, oi) in [
        ("2021-09-30", "200", "60", "40"),
        ("2022-09-30", "200", "60", "80"),
        ("2023-09-30", "200", "60", "60"),
    ] {
        raw.insert(Period::from(period), "totalRevenue", revenue);
        raw.insert(Period::from(period), "grossProfit", gross);
        raw.insert(Period::from(period), "operatingIncome", oi);
        raw.insert(Period::from(period), "depreciationAndAmortization", "10");
        raw.insert(Period::from(period), "reportedCurrency", "USD");
    }
    raw
}

fn balance_statement() -> RawStatement {
    let mut raw = RawStatement::new();
    for period in PERIODS {
        raw.insert(Period::from(period), "totalAssets", "1K");
        raw.insert(Period::from(period), "intangibleAssets", "100");
        raw.insert(Period::from(period), "goodwill", "None");
        raw.insert(
            Period::from(period),
            "cashAndCashEquivalentsAtCarryingValue",
            "400",
        );
    }
    raw
}

fn cash_statement() -> RawStatement {
    let mut raw = RawStatement::new();
    for period in PERIODS {
        raw.insert(Period::from(period), "operatingCashflow", "90");
        raw.insert(Period::from(period), "capitalExpenditures", "50");
        raw.insert(
            Period::from(period),
            "depreciationDepletionAndAmortization",
            "10",
        );
        raw.insert(Period::from(period), "changeInOperatingAssets", "0");
        raw.insert(Period::from(period), "changeInOperatingLiabilities", "0");
    }
    raw
}

fn build_report() -> moat_output::TickerReport {
    let income = normalize(&income_statement()).unwrap();
    let balance = normalize(&balance_statement()).unwrap();
    let cash = normalize(&cash_statement()).unwrap();

    let metrics = MetricsEngine::new().compute(&income, &balance, &cash).unwrap();

    let mut overview = BTreeMap::new();
    overview.insert("Symbol".to_string(), "AAPL".to_string());
    overview.insert("Sector".to_string(), "TECHNOLOGY".to_string());

    ReportBuilder::new()
        .symbol("AAPL")
        .statement(StatementKind::CashFlow, &cash)
        .statement(StatementKind::Income, &income)
        .statement(StatementKind::BalanceSheet, &balance)
        .metrics(&metrics)
        .overview(&overview)
        .build()
}

#[test]
fn report_sections_follow_canonical_order() {
    let report = build_report();

    let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
    // No earnings section in this report; the rest keep canonical order.
    let expected: Vec<&str> = SECTION_ORDER
        .iter()
        .copied()
        .filter(|t| *t != "earnings")
        .collect();
    assert_eq!(titles, expected);
}

#[test]
fn metrics_section_rows_are_the_fixed_panel() {
    let report = build_report();
    let metrics = report.section("metrics").unwrap();

    let labels: Vec<&str> = metrics.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        labels,
        vec!["Gross Margin", "Operating Margin", "ROIIC", "ROTA", "FCF"]
    );

    // ΔOI = +40 then −20 against a constant ΔIC of 40.
    let roiic = &metrics.rows[2];
    assert_eq!(roiic[1], "n/a");
    assert_eq!(roiic[2], "100");
    assert_eq!(roiic[3], "negative");
}

#[test]
fn csv_artifact_contains_all_sections() {
    let report = build_report();
    let dir = std::env::temp_dir().join("moat_report_test_csv");

    let artifact = write_report(&dir, &report, ExportFormat::Csv).unwrap();

    for section in ["metrics", "overview", "cash", "income", "balance"] {
        assert!(artifact.join(format!("{section}.csv")).exists());
    }

    let income = std::fs::read_to_string(artifact.join("income.csv")).unwrap();
    assert!(income.starts_with("field,2021-09-30,2022-09-30,2023-09-30"));
    assert!(income.contains("reportedCurrency,USD,USD,USD"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_export_round_trips() {
    let report = build_report();

    let json = report.export_to_string(ExportFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["symbol"], "AAPL");
    let sections = parsed["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 5);
    assert_eq!(sections[0]["title"], "metrics");
}
