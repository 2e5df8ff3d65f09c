//! Fundamentals endpoints: overview, statements, and earnings.
//!
//! Each fetcher returns one record per reporting period, keyed by the
//! provider's `fiscalDateEnding` label. Statement responses arrive as
//! arrays of field→value objects; the earnings history arrives as a
//! row-oriented table whose first row carries the column labels and must
//! be promoted into the header before the rows become a [`RawStatement`].

use crate::alpha::AlphaVantageClient;
use crate::error::{DataError, Result};
use crate::statement::{Cadence, Period, RawStatement};
use std::collections::{BTreeMap, BTreeSet};

/// Field carrying the reporting-period label in every provider record.
const PERIOD_FIELD: &str = "fiscalDateEnding";

impl AlphaVantageClient {
    /// Fetch the company overview as a flat key→value map.
    ///
    /// Overview values are passed through to reports verbatim — they are
    /// never normalized.
    pub async fn overview(&self, symbol: &str) -> Result<BTreeMap<String, String>> {
        let body = self.get_json("OVERVIEW", symbol).await?;

        let object = body.as_object().ok_or_else(|| {
            DataError::ProviderApi(format!("OVERVIEW response for {symbol} is not an object"))
        })?;

        Ok(object
            .iter()
            .map(|(k, v)| (k.clone(), value_to_raw_string(v)))
            .collect())
    }

    /// Fetch the cash flow statement, one record per reporting period.
    pub async fn cash_flow(
        &self,
        symbol: &str,
        limit: usize,
        cadence: Cadence,
    ) -> Result<RawStatement> {
        self.statement("CASH_FLOW", symbol, limit, cadence).await
    }

    /// Fetch the income statement, one record per reporting period.
    pub async fn income_statement(
        &self,
        symbol: &str,
        limit: usize,
        cadence: Cadence,
    ) -> Result<RawStatement> {
        self.statement("INCOME_STATEMENT", symbol, limit, cadence)
            .await
    }

    /// Fetch the balance sheet, one record per reporting period.
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        limit: usize,
        cadence: Cadence,
    ) -> Result<RawStatement> {
        self.statement("BALANCE_SHEET", symbol, limit, cadence).await
    }

    /// Fetch the earnings history, one record per reporting period.
    ///
    /// The raw earnings table carries its column labels in the first row;
    /// [`promote_header_row`] lifts them into field names and drops the
    /// label row from the data.
    pub async fn earnings(
        &self,
        symbol: &str,
        limit: usize,
        cadence: Cadence,
    ) -> Result<RawStatement> {
        let body = self.get_json("EARNINGS", symbol).await?;

        let records = body
            .get(cadence.earnings_key())
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                DataError::ProviderApi(format!(
                    "EARNINGS response for {symbol} has no {}",
                    cadence.earnings_key()
                ))
            })?;

        if records.is_empty() {
            return Ok(RawStatement::new());
        }

        let labels: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.as_object())
            .flat_map(|o| o.keys().map(String::as_str))
            .collect();

        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(labels.iter().map(|l| (*l).to_string()).collect::<Vec<_>>());
        for record in records {
            let object = record.as_object().ok_or_else(|| {
                DataError::ProviderApi(format!("EARNINGS record for {symbol} is not an object"))
            })?;
            rows.push(
                labels
                    .iter()
                    .map(|l| object.get(*l).map_or_else(|| "None".to_string(), value_to_raw_string))
                    .collect(),
            );
        }

        promote_header_row(&rows, limit)
    }

    async fn statement(
        &self,
        function: &str,
        symbol: &str,
        limit: usize,
        cadence: Cadence,
    ) -> Result<RawStatement> {
        let body = self.get_json(function, symbol).await?;

        let reports = body
            .get(cadence.reports_key())
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                DataError::ProviderApi(format!(
                    "{function} response for {symbol} has no {}",
                    cadence.reports_key()
                ))
            })?;

        reports_to_statement(reports, limit)
    }
}

/// Convert the `limit` most recent provider report objects into a raw
/// statement keyed by reporting period.
pub fn reports_to_statement(reports: &[serde_json::Value], limit: usize) -> Result<RawStatement> {
    let mut statement = RawStatement::new();

    for report in reports.iter().take(limit) {
        let object = report
            .as_object()
            .ok_or_else(|| DataError::ProviderApi("statement record is not an object".to_string()))?;

        let period = object
            .get(PERIOD_FIELD)
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                DataError::ProviderApi(format!("statement record has no {PERIOD_FIELD}"))
            })?;

        for (field, value) in object {
            if field != PERIOD_FIELD {
                statement.insert(Period::from(period), field, value_to_raw_string(value));
            }
        }
    }

    Ok(statement)
}

/// Promote the first row of a raw table into column labels and key the
/// remaining rows by their reporting period.
///
/// The label row must name a `fiscalDateEnding` column; only the `limit`
/// most recent data rows are kept.
pub fn promote_header_row(rows: &[Vec<String>], limit: usize) -> Result<RawStatement> {
    let Some((labels, data)) = rows.split_first() else {
        return Err(DataError::ProviderApi(
            "earnings table has no header row".to_string(),
        ));
    };

    let period_index = labels
        .iter()
        .position(|l| l == PERIOD_FIELD)
        .ok_or_else(|| {
            DataError::ProviderApi(format!("earnings header has no {PERIOD_FIELD} column"))
        })?;

    let mut statement = RawStatement::new();
    for row in data.iter().take(limit) {
        if row.len() != labels.len() {
            return Err(DataError::ProviderApi(format!(
                "earnings row has {} cells, header has {}",
                row.len(),
                labels.len()
            )));
        }
        let period = Period::from(row[period_index].as_str());
        for (label, value) in labels.iter().zip(row) {
            if label != PERIOD_FIELD {
                statement.insert(period.clone(), label, value);
            }
        }
    }

    Ok(statement)
}

/// Render a JSON leaf as the provider's raw string form.
fn value_to_raw_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reports_to_statement_keys_by_period() {
        let reports = vec![
            json!({"fiscalDateEnding": "2023-09-30", "totalRevenue": "383.3B", "goodwill": "None"}),
            json!({"fiscalDateEnding": "2022-09-30", "totalRevenue": "394.3B", "goodwill": "None"}),
        ];

        let statement = reports_to_statement(&reports, 10).unwrap();

        assert_eq!(statement.len(), 2);
        let record = &statement.records()[&Period::from("2023-09-30")];
        assert_eq!(record["totalRevenue"], "383.3B");
        assert_eq!(record["goodwill"], "None");
        assert!(!record.contains_key("fiscalDateEnding"));
    }

    #[test]
    fn test_reports_to_statement_honors_limit() {
        let reports = vec![
            json!({"fiscalDateEnding": "2023-09-30", "totalRevenue": "3"}),
            json!({"fiscalDateEnding": "2022-09-30", "totalRevenue": "2"}),
            json!({"fiscalDateEnding": "2021-09-30", "totalRevenue": "1"}),
        ];

        // Reports arrive most recent first; the limit keeps the newest.
        let statement = reports_to_statement(&reports, 2).unwrap();

        let labels: Vec<&str> = statement.periods().map(Period::as_str).collect();
        assert_eq!(labels, vec!["2022-09-30", "2023-09-30"]);
    }

    #[test]
    fn test_reports_without_period_rejected() {
        let reports = vec![json!({"totalRevenue": "1"})];
        let err = reports_to_statement(&reports, 10).unwrap_err();
        assert!(matches!(err, DataError::ProviderApi(_)));
    }

    #[test]
    fn test_promote_header_row() {
        let rows = vec![
            vec!["fiscalDateEnding".to_string(), "reportedEPS".to_string()],
            vec!["2023-09-30".to_string(), "6.13".to_string()],
            vec!["2022-09-30".to_string(), "6.11".to_string()],
        ];

        let statement = promote_header_row(&rows, 10).unwrap();

        assert_eq!(statement.len(), 2);
        let record = &statement.records()[&Period::from("2023-09-30")];
        assert_eq!(record["reportedEPS"], "6.13");
    }

    #[test]
    fn test_promote_header_row_requires_period_column() {
        let rows = vec![
            vec!["reportedEPS".to_string()],
            vec!["6.13".to_string()],
        ];
        let err = promote_header_row(&rows, 10).unwrap_err();
        assert!(matches!(err, DataError::ProviderApi(_)));
    }

    #[test]
    fn test_promote_header_row_rejects_ragged_rows() {
        let rows = vec![
            vec!["fiscalDateEnding".to_string(), "reportedEPS".to_string()],
            vec!["2023-09-30".to_string()],
        ];
        let err = promote_header_row(&rows, 10).unwrap_err();
        assert!(matches!(err, DataError::ProviderApi(_)));
    }

    #[test]
    fn test_value_to_raw_string() {
        assert_eq!(value_to_raw_string(&json!("1.5B")), "1.5B");
        assert_eq!(value_to_raw_string(&json!(null)), "None");
        assert_eq!(value_to_raw_string(&json!(42)), "42");
    }
}
