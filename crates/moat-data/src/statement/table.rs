//! Normalized statement tables.

use crate::error::{DataError, Result};
use crate::statement::Period;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized statement: an ordered sequence of periods (oldest first)
/// against integer-valued field columns.
///
/// Invariants: every column holds exactly one value per period, and every
/// non-exempt field is a pure integer — no residual suffix or null marker
/// survives normalization. The currency passthrough fields live in
/// separate text columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTable {
    periods: Vec<Period>,
    numeric: BTreeMap<String, Vec<i64>>,
    text: BTreeMap<String, Vec<String>>,
}

impl NormalizedTable {
    /// Create an empty table over the given period sequence.
    pub const fn new(periods: Vec<Period>) -> Self {
        Self {
            periods,
            numeric: BTreeMap::new(),
            text: BTreeMap::new(),
        }
    }

    /// Insert an integer column. The column length must match the period
    /// sequence.
    pub fn insert_numeric(&mut self, field: impl Into<String>, values: Vec<i64>) -> Result<()> {
        let field = field.into();
        if values.len() != self.periods.len() {
            return Err(DataError::ColumnShape {
                field,
                expected: self.periods.len(),
                got: values.len(),
            });
        }
        self.numeric.insert(field, values);
        Ok(())
    }

    /// Insert a text column (currency passthrough). The column length must
    /// match the period sequence.
    pub fn insert_text(&mut self, field: impl Into<String>, values: Vec<String>) -> Result<()> {
        let field = field.into();
        if values.len() != self.periods.len() {
            return Err(DataError::ColumnShape {
                field,
                expected: self.periods.len(),
                got: values.len(),
            });
        }
        self.text.insert(field, values);
        Ok(())
    }

    /// The period sequence, oldest first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of reporting periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the table has no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// An integer column by field name, one value per period.
    pub fn column(&self, field: &str) -> Option<&[i64]> {
        self.numeric.get(field).map(Vec::as_slice)
    }

    /// A text column by field name, one value per period.
    pub fn text_column(&self, field: &str) -> Option<&[String]> {
        self.text.get(field).map(Vec::as_slice)
    }

    /// Names of the integer columns, in sorted order.
    pub fn numeric_fields(&self) -> impl Iterator<Item = &str> {
        self.numeric.keys().map(String::as_str)
    }

    /// Names of the text columns, in sorted order.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        self.text.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(labels: &[&str]) -> Vec<Period> {
        labels.iter().copied().map(Period::from).collect()
    }

    #[test]
    fn test_insert_and_read_columns() {
        let mut table = NormalizedTable::new(periods(&["2021-09-30", "2022-09-30"]));
        table.insert_numeric("totalRevenue", vec![100, 120]).unwrap();
        table
            .insert_text("reportedCurrency", vec!["USD".to_string(), "USD".to_string()])
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column("totalRevenue"), Some([100, 120].as_slice()));
        assert_eq!(table.column("missing"), None);
        assert_eq!(table.text_column("reportedCurrency").unwrap()[0], "USD");
    }

    #[test]
    fn test_column_shape_is_enforced() {
        let mut table = NormalizedTable::new(periods(&["2021-09-30", "2022-09-30"]));
        let err = table.insert_numeric("totalRevenue", vec![100]).unwrap_err();

        assert!(matches!(
            err,
            DataError::ColumnShape {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }
}
