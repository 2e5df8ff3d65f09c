//! Integration tests for statement normalization

use moat_data::{DataError, Period, RawStatement, normalize, parse_raw_value};
use rstest::rstest;

#[rstest]
#[case("1.5B", 1_500_000_000)]
#[case("2T", 2_000_000_000)] // trillion==billion quirk, preserved
#[case("2B", 2_000_000_000)]
#[case("750K", 750_000)]
#[case("3.25M", 3_250_000)]
#[case("-2.5M", -2_500_000)]
#[case("0", 0)]
#[case("96995000000", 96_995_000_000)]
#[case("None", 0)]
fn parse_recovers_documented_scale(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(parse_raw_value("field", raw).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("-")]
#[case(".")]
#[case("12,345")]
#[case("1.5X")]
#[case("$100")]
#[case("1.5 B")]
#[case("none")]
fn parse_rejects_malformed_shapes(#[case] raw: &str) {
    assert!(matches!(
        parse_raw_value("field", raw),
        Err(DataError::MalformedValue { .. })
    ));
}

fn aapl_style_statement() -> RawStatement {
    let mut raw = RawStatement::new();
    for (period, revenue, gross, currency) in [
        ("2021-09-30", "365.8B", "152.8B", "USD"),
        ("2022-09-30", "394.3B", "170.7B", "USD"),
        ("2023-09-30", "383.3B", "169.1B", "USD"),
    ] {
        raw.insert(Period::from(period), "totalRevenue", revenue);
        raw.insert(Period::from(period), "grossProfit", gross);
        raw.insert(Period::from(period), "reportedCurrency", currency);
        raw.insert(Period::from(period), "goodwill", "None");
    }
    raw
}

#[test]
fn normalize_produces_pure_integer_columns_oldest_first() {
    let table = normalize(&aapl_style_statement()).unwrap();

    let labels: Vec<&str> = table.periods().iter().map(Period::as_str).collect();
    assert_eq!(labels, vec!["2021-09-30", "2022-09-30", "2023-09-30"]);

    assert_eq!(
        table.column("totalRevenue"),
        Some([365_800_000_000, 394_300_000_000, 383_300_000_000].as_slice())
    );
    assert_eq!(table.column("goodwill"), Some([0, 0, 0].as_slice()));
}

#[test]
fn normalize_passes_currency_through_untouched() {
    let table = normalize(&aapl_style_statement()).unwrap();

    assert!(table.column("reportedCurrency").is_none());
    assert_eq!(
        table.text_column("reportedCurrency").unwrap(),
        ["USD".to_string(), "USD".to_string(), "USD".to_string()]
    );
}

#[test]
fn normalize_does_not_backfill_missing_periods() {
    // A period absent from the raw source is simply absent from the table.
    let mut raw = RawStatement::new();
    raw.insert(Period::from("2021-09-30"), "totalRevenue", "100");
    raw.insert(Period::from("2023-09-30"), "totalRevenue", "120");

    let table = normalize(&raw).unwrap();

    assert_eq!(table.len(), 2);
    assert!(
        !table
            .periods()
            .iter()
            .any(|p| p.as_str() == "2022-09-30")
    );
}

#[test]
fn normalize_surfaces_parse_failures_with_field_and_value() {
    let mut raw = RawStatement::new();
    raw.insert(Period::from("2021-09-30"), "totalRevenue", "12,345");

    match normalize(&raw) {
        Err(DataError::MalformedValue { field, value }) => {
            assert_eq!(field, "totalRevenue");
            assert_eq!(value, "12,345");
        }
        other => panic!("expected MalformedValue, got {other:?}"),
    }
}
