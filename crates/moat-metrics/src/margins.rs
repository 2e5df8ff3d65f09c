//! Gross and operating margin.
//!
//! Both margins are the same shape: a ratio of an income statement line
//! to total revenue, rounded to 4 decimals before the ×100 scaling.

use crate::error::{MetricsError, Result};
use crate::table::Metric;
use crate::value::{MetricValue, round4};
use moat_data::Period;

/// Gross margin per period: `100 × round4(grossProfit / totalRevenue)`.
pub fn gross_margin(
    periods: &[Period],
    gross_profit: &[i64],
    total_revenue: &[i64],
) -> Result<Vec<MetricValue>> {
    ratio_percent(Metric::GrossMargin, periods, gross_profit, total_revenue)
}

/// Operating margin per period: `100 × round4(operatingIncome / totalRevenue)`.
pub fn operating_margin(
    periods: &[Period],
    operating_income: &[i64],
    total_revenue: &[i64],
) -> Result<Vec<MetricValue>> {
    ratio_percent(
        Metric::OperatingMargin,
        periods,
        operating_income,
        total_revenue,
    )
}

fn ratio_percent(
    metric: Metric,
    periods: &[Period],
    numerator: &[i64],
    denominator: &[i64],
) -> Result<Vec<MetricValue>> {
    periods
        .iter()
        .enumerate()
        .map(|(i, period)| {
            if denominator[i] == 0 {
                return Err(MetricsError::DivisionByZero {
                    metric,
                    period: period.clone(),
                });
            }
            let ratio = numerator[i] as f64 / denominator[i] as f64;
            Ok(MetricValue::Percent(100.0 * round4(ratio)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn periods(n: usize) -> Vec<Period> {
        (0..n)
            .map(|i| Period::new(format!("202{i}-09-30")))
            .collect()
    }

    #[test]
    fn test_gross_margin_rounds_ratio_before_scaling() {
        // 123456/1000000 = 0.123456 → round4 → 0.1235 → 12.35.
        // Scaling first would give 12.3456 — the orders diverge.
        let values = gross_margin(&periods(1), &[123_456], &[1_000_000]).unwrap();

        let v = values[0].as_f64().unwrap();
        assert_relative_eq!(v, 12.35, epsilon = 1e-9);
        assert!((v - 12.3456).abs() > 1e-3);
    }

    #[test]
    fn test_operating_margin_per_period() {
        let values =
            operating_margin(&periods(2), &[30, 25], &[100, 100]).unwrap();

        assert_eq!(values[0], MetricValue::Percent(30.0));
        assert_eq!(values[1], MetricValue::Percent(25.0));
    }

    #[test]
    fn test_zero_revenue_is_division_by_zero() {
        let err = gross_margin(&periods(1), &[10], &[0]).unwrap_err();

        assert!(matches!(
            err,
            MetricsError::DivisionByZero {
                metric: Metric::GrossMargin,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_margins_are_numeric_not_sentinel() {
        let values = operating_margin(&periods(1), &[-50], &[200]).unwrap();
        assert_eq!(values[0], MetricValue::Percent(-25.0));
    }
}
