//! Typed field normalization for aligned rows.
//!
//! Cells come out of alignment as raw text. This module coerces them per
//! column kind: dates through the provider's date rule, amounts through a
//! currency scrub, categories and free text as trimmed strings. Blank cells
//! become nulls in every column.

use chrono::NaiveDate;

use crate::align::AlignedTable;
use crate::error::RowError;
use crate::provider::{ColumnKind, ColumnSpec, DateRule};

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Date(NaiveDate),
    Amount(f64),
    Category(String),
    Text(String),
    Null,
}

impl Field {
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }
}

/// One output row, positionally matching the canonical schema.
pub type NormalizedRow = Vec<Field>;

/// Normalize every row of an aligned fragment, stopping at the first bad
/// row. Row-level policy (skip vs. abort) lives in the pipeline driver; this
/// function only reports.
pub fn normalize_fragment(
    aligned: &AlignedTable,
    columns: &[ColumnSpec],
    date_rule: DateRule,
    statement_year: i32,
) -> Result<Vec<NormalizedRow>, RowError> {
    aligned
        .rows
        .iter()
        .enumerate()
        .map(|(row, cells)| normalize_row(row, cells, columns, date_rule, statement_year))
        .collect()
}

/// Normalize one aligned row.
///
/// `statement_year` supplies the year for date rules that omit it; it is
/// ignored for in-band-year formats.
pub fn normalize_row(
    row: usize,
    cells: &[Option<String>],
    columns: &[ColumnSpec],
    date_rule: DateRule,
    statement_year: i32,
) -> Result<NormalizedRow, RowError> {
    columns
        .iter()
        .zip(cells)
        .map(|(col, cell)| {
            // A column the variant lacks, or a blank cell, is null in any
            // column kind.
            let text = match cell {
                Some(raw) => raw.trim(),
                None => return Ok(Field::Null),
            };
            if text.is_empty() {
                return Ok(Field::Null);
            }

            match col.kind {
                ColumnKind::Category => Ok(Field::Category(text.to_string())),
                ColumnKind::Text => Ok(Field::Text(text.to_string())),
                ColumnKind::Date => parse_date(text, date_rule, statement_year)
                    .map(Field::Date)
                    .ok_or_else(|| RowError::DateParse {
                        row,
                        column: col.name.to_string(),
                        value: text.to_string(),
                    }),
                ColumnKind::Amount => parse_amount(text)
                    .map(Field::Amount)
                    .ok_or_else(|| RowError::AmountParse {
                        row,
                        column: col.name.to_string(),
                        value: text.to_string(),
                    }),
            }
        })
        .collect()
}

fn parse_date(text: &str, rule: DateRule, statement_year: i32) -> Option<NaiveDate> {
    match rule {
        // "Jan 05" plus the externally supplied year.
        DateRule::MonthDay => {
            NaiveDate::parse_from_str(&format!("{text} {statement_year}"), "%b %d %Y").ok()
        }
        DateRule::Full(format) => NaiveDate::parse_from_str(text, format).ok(),
    }
}

/// Strip the decorations statements print around amounts: currency symbol,
/// thousands separators, explicit plus signs, and stray whitespace.
/// "- $1,234.56" comes out as -1234.56.
fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '+') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
