//! CSV export of result tables.

use std::path::Path;

use anyhow::{Context, Result};
use statement_core::{Field, ResultTable};

/// Write one result table as CSV: canonical header row, then one line per
/// normalized row. Nulls render as empty cells, dates as ISO-8601, amounts
/// with two decimals.
pub fn write_csv(table: &ResultTable, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(render))?;
    }
    writer.flush().context("flushing csv")?;
    Ok(())
}

fn render(field: &Field) -> String {
    match field {
        Field::Date(date) => date.format("%Y-%m-%d").to_string(),
        Field::Amount(amount) => format!("{amount:.2}"),
        Field::Category(text) | Field::Text(text) => text.clone(),
        Field::Null => String::new(),
    }
}
