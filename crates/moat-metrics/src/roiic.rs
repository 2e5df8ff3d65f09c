//! Return on incremental invested capital.
//!
//! ROIIC is the one stateful metric: each period is judged against its
//! predecessor, so the computation is a scan over adjacent period pairs
//! carrying the previous period's operating income.

use crate::error::{MetricsError, Result};
use crate::table::Metric;
use crate::value::{MetricValue, round4};
use moat_data::Period;

/// ROIIC per period.
///
/// For each adjacent pair (previous, current):
///
/// - `ΔOI = operatingIncome[current] − operatingIncome[previous]`
/// - `ΔIC = capitalExpenditures[current]
///   − depreciationDepletionAndAmortization[current]
///   + (changeInOperatingAssets[current] − changeInOperatingLiabilities[current])`
///
/// The first matching rule wins — the order matters, since both
/// conditions can hold at once:
///
/// 1. `ΔOI < 0` → `negative`
/// 2. `ΔIC < 0` → `infinite`
/// 3. otherwise → `round4(100 × ΔOI / ΔIC)`
///
/// The earliest period has no predecessor and gets an explicit
/// not-applicable placeholder. A zero `ΔIC` reaching rule 3 is a
/// division-by-zero error, never an emitted infinity.
pub fn roiic(
    periods: &[Period],
    operating_income: &[i64],
    capital_expenditures: &[i64],
    depreciation_depletion_and_amortization: &[i64],
    change_in_operating_assets: &[i64],
    change_in_operating_liabilities: &[i64],
) -> Result<Vec<MetricValue>> {
    let mut values = Vec::with_capacity(periods.len());
    if periods.is_empty() {
        return Ok(values);
    }

    values.push(MetricValue::NotApplicable);

    let mut previous_income = operating_income[0];
    for i in 1..periods.len() {
        let income_delta = operating_income[i] - previous_income;
        let invested_delta = capital_expenditures[i]
            - depreciation_depletion_and_amortization[i]
            + (change_in_operating_assets[i] - change_in_operating_liabilities[i]);

        let value = if income_delta < 0 {
            MetricValue::Negative
        } else if invested_delta < 0 {
            MetricValue::Infinite
        } else if invested_delta == 0 {
            return Err(MetricsError::DivisionByZero {
                metric: Metric::Roiic,
                period: periods[i].clone(),
            });
        } else {
            MetricValue::Percent(round4(100.0 * income_delta as f64 / invested_delta as f64))
        };

        values.push(value);
        previous_income = operating_income[i];
    }

    Ok(values)
}
