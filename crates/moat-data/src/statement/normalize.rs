//! Statement normalization.
//!
//! The data provider encodes statement values as strings: plain numbers,
//! magnitude-suffixed numbers (`"1.5B"`), or the literal `"None"` null
//! marker. Normalization converts every non-exempt field into an exact
//! integer in a single scan per column, leaving the reported-currency
//! fields untouched as text.

use crate::error::{DataError, Result};
use crate::statement::{NormalizedTable, RawStatement};
use std::collections::BTreeSet;

/// The provider's textual null marker. Encodes to zero — the only
/// sanctioned implicit substitution in the pipeline.
const NULL_MARKER: &str = "None";

/// Field names exempt from numeric coercion, in both observed spellings.
const CURRENCY_FIELDS: [&str; 2] = ["Reported Currency", "reportedCurrency"];

/// Magnitude scale for a trailing suffix character.
///
/// The trillion suffix scales by 1e9, identical to billion. That matches
/// the upstream feed exactly and is pinned by tests; correcting it to 1e12
/// would silently diverge from the provider's own numbers.
const fn suffix_scale(c: char) -> Option<f64> {
    match c {
        'K' => Some(1e3),
        'M' => Some(1e6),
        'B' => Some(1e9),
        'T' => Some(1e9),
        _ => None,
    }
}

/// Whether a field is passed through as text rather than coerced.
fn is_currency_field(field: &str) -> bool {
    CURRENCY_FIELDS.contains(&field)
}

/// Parse a single raw value into an exact integer.
///
/// Accepts the null marker (→ 0) and strings of the shape
/// `[-]?[0-9.]+[KMBT]?`; the suffix scales the numeric prefix and the
/// result is truncated toward zero, not rounded. Anything else is a
/// [`DataError::MalformedValue`].
pub fn parse_raw_value(field: &str, value: &str) -> Result<i64> {
    if value == NULL_MARKER {
        return Ok(0);
    }

    let malformed = || DataError::MalformedValue {
        field: field.to_string(),
        value: value.to_string(),
    };

    let (prefix, scale) = match value.chars().last().and_then(suffix_scale) {
        Some(scale) => (&value[..value.len() - 1], scale),
        None => (value, 1.0),
    };

    let digits = prefix.strip_prefix('-').unwrap_or(prefix);
    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        || !digits.chars().any(|c| c.is_ascii_digit())
    {
        return Err(malformed());
    }

    let magnitude: f64 = prefix.parse().map_err(|_| malformed())?;

    // Truncating cast, matching the upstream whole-number coercion.
    Ok((magnitude * scale) as i64)
}

/// Normalize a raw statement into an integer table.
///
/// Periods come out oldest first; fields absent from the raw source are
/// simply absent from the table (no backfill), but a field present in one
/// period and missing from another is a [`DataError::MissingField`] — the
/// table's columns must stay rectangular.
pub fn normalize(raw: &RawStatement) -> Result<NormalizedTable> {
    let periods: Vec<_> = raw.periods().cloned().collect();
    let mut table = NormalizedTable::new(periods);

    let fields: BTreeSet<&str> = raw
        .records()
        .values()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();

    for field in fields {
        if is_currency_field(field) {
            let mut column = Vec::with_capacity(raw.len());
            for (period, record) in raw.records() {
                let value = record.get(field).ok_or_else(|| DataError::MissingField {
                    field: field.to_string(),
                    period: period.clone(),
                })?;
                column.push(value.clone());
            }
            table.insert_text(field, column)?;
        } else {
            let mut column = Vec::with_capacity(raw.len());
            for (period, record) in raw.records() {
                let value = record.get(field).ok_or_else(|| DataError::MissingField {
                    field: field.to_string(),
                    period: period.clone(),
                })?;
                column.push(parse_raw_value(field, value)?);
            }
            table.insert_numeric(field, column)?;
        }
    }

    Ok(table)
}
