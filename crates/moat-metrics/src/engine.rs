//! The metrics engine.
//!
//! Validates that the three input statements agree on their reporting
//! periods and carry every required field, then derives the full metric
//! panel. Validation happens before any arithmetic so a bad input fails
//! loudly instead of producing a partially-computed table.

use crate::error::{MetricsError, Result};
use crate::fields;
use crate::table::{Metric, MetricsTable};
use crate::{fcf, margins, roiic, rota};
use moat_data::NormalizedTable;

/// Derives the metric panel from normalized statements.
///
/// Pure and stateless: each call depends only on its inputs, so separate
/// tickers can be computed concurrently by an external orchestrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    /// Create a new engine.
    pub const fn new() -> Self {
        Self
    }

    /// Compute the metric panel from income, balance sheet, and cash flow
    /// tables sharing an identical ordered period sequence.
    pub fn compute(
        &self,
        income: &NormalizedTable,
        balance: &NormalizedTable,
        cash: &NormalizedTable,
    ) -> Result<MetricsTable> {
        ensure_aligned("income", income, "balance", balance)?;
        ensure_aligned("income", income, "cash", cash)?;

        for field in fields::INCOME_FIELDS {
            require(income, "income", field)?;
        }
        for field in fields::BALANCE_FIELDS {
            require(balance, "balance", field)?;
        }
        for field in fields::CASH_FIELDS {
            require(cash, "cash", field)?;
        }

        let periods = income.periods();

        let fcf_values = fcf::fcf(
            column(cash, "cash", fields::cash::OPERATING_CASHFLOW)?,
            column(cash, "cash", fields::cash::CAPITAL_EXPENDITURES)?,
        );
        let roiic_values = roiic::roiic(
            periods,
            column(income, "income", fields::income::OPERATING_INCOME)?,
            column(cash, "cash", fields::cash::CAPITAL_EXPENDITURES)?,
            column(cash, "cash", fields::cash::DEPRECIATION_DEPLETION_AND_AMORTIZATION)?,
            column(cash, "cash", fields::cash::CHANGE_IN_OPERATING_ASSETS)?,
            column(cash, "cash", fields::cash::CHANGE_IN_OPERATING_LIABILITIES)?,
        )?;
        let gross = margins::gross_margin(
            periods,
            column(income, "income", fields::income::GROSS_PROFIT)?,
            column(income, "income", fields::income::TOTAL_REVENUE)?,
        )?;
        let operating = margins::operating_margin(
            periods,
            column(income, "income", fields::income::OPERATING_INCOME)?,
            column(income, "income", fields::income::TOTAL_REVENUE)?,
        )?;
        let rota_values = rota::rota(
            periods,
            column(income, "income", fields::income::OPERATING_INCOME)?,
            column(income, "income", fields::income::DEPRECIATION_AND_AMORTIZATION)?,
            column(balance, "balance", fields::balance::TOTAL_ASSETS)?,
            column(balance, "balance", fields::balance::INTANGIBLE_ASSETS)?,
            column(balance, "balance", fields::balance::GOODWILL)?,
            column(balance, "balance", fields::balance::CASH_AND_EQUIVALENTS)?,
        )?;

        Ok(MetricsTable::assemble(
            periods.to_vec(),
            vec![
                (Metric::Fcf, fcf_values),
                (Metric::Roiic, roiic_values),
                (Metric::GrossMargin, gross),
                (Metric::OperatingMargin, operating),
                (Metric::Rota, rota_values),
            ],
        ))
    }
}

fn require(table: &NormalizedTable, statement: &'static str, field: &str) -> Result<()> {
    column(table, statement, field).map(|_| ())
}

fn column<'a>(
    table: &'a NormalizedTable,
    statement: &'static str,
    field: &str,
) -> Result<&'a [i64]> {
    table.column(field).ok_or_else(|| MetricsError::MissingField {
        statement,
        field: field.to_string(),
    })
}

fn ensure_aligned(
    left_name: &'static str,
    left: &NormalizedTable,
    right_name: &'static str,
    right: &NormalizedTable,
) -> Result<()> {
    if left.periods() == right.periods() {
        return Ok(());
    }

    let detail = if left.len() != right.len() {
        format!("{} periods vs {}", left.len(), right.len())
    } else {
        left.periods()
            .iter()
            .zip(right.periods())
            .find(|(l, r)| l != r)
            .map_or_else(
                || "period sequences differ".to_string(),
                |(l, r)| format!("{l} vs {r}"),
            )
    };

    Err(MetricsError::PeriodMismatch {
        left: left_name,
        right: right_name,
        detail,
    })
}
