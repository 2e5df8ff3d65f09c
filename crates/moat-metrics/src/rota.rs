//! Return on total assets.
//!
//! ROTA relates operating income plus depreciation to a tightened asset
//! base: total assets net of intangibles, goodwill, and three quarters of
//! the cash position.

use crate::error::{MetricsError, Result};
use crate::table::Metric;
use crate::value::{MetricValue, round4};
use moat_data::Period;

/// Fraction of cash and equivalents excluded from the asset base.
const CASH_HAIRCUT: f64 = 0.75;

/// ROTA per period:
/// `100 × round4((operatingIncome + depreciationAndAmortization) /
/// (totalAssets − intangibleAssets − goodwill − 0.75 × cashAndEquivalents))`.
#[allow(clippy::too_many_arguments)]
pub fn rota(
    periods: &[Period],
    operating_income: &[i64],
    depreciation_and_amortization: &[i64],
    total_assets: &[i64],
    intangible_assets: &[i64],
    goodwill: &[i64],
    cash_and_equivalents: &[i64],
) -> Result<Vec<MetricValue>> {
    periods
        .iter()
        .enumerate()
        .map(|(i, period)| {
            let earnings = (operating_income[i] + depreciation_and_amortization[i]) as f64;
            let asset_base = (total_assets[i] - intangible_assets[i] - goodwill[i]) as f64
                - CASH_HAIRCUT * cash_and_equivalents[i] as f64;

            if asset_base == 0.0 {
                return Err(MetricsError::DivisionByZero {
                    metric: Metric::Rota,
                    period: period.clone(),
                });
            }
            Ok(MetricValue::Percent(100.0 * round4(earnings / asset_base)))
        })
        .collect()
}
