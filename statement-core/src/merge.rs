//! Concatenation of normalized fragments into the final result table.

use crate::error::{ReadError, Result};
use crate::normalize::{Field, NormalizedRow};
use crate::provider::ProviderConfig;

/// Final per-document output: canonical column names plus every recognized,
/// normalized row in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<NormalizedRow>,
}

impl ResultTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == name)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Field> {
        self.rows.get(row)?.get(self.column_index(column)?)
    }
}

/// Concatenate recognized fragments in document order.
///
/// Row order within each fragment is preserved; nothing is deduplicated or
/// re-sorted, statement tables are already chronological. Zero recognized
/// fragments means the document uses a layout we do not know.
pub fn merge(config: &ProviderConfig, fragments: Vec<Vec<NormalizedRow>>) -> Result<ResultTable> {
    if fragments.is_empty() {
        return Err(ReadError::EmptyResult);
    }
    Ok(ResultTable {
        columns: config.columns.iter().map(|c| c.name).collect(),
        rows: fragments.into_iter().flatten().collect(),
    })
}
