//! Raw table grids as handed over by the extraction engine.

use crate::error::{ReadError, Result};

pub const DEFAULT_ACCURACY_THRESHOLD: u32 = 50;

/// One table detected in the source document: a rectangular grid of text
/// cells plus the extractor's accuracy score for the read.
///
/// Immutable once built; a table belongs to the single pipeline run that
/// consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// 1-based page the table was detected on.
    pub page: u32,
    /// Extractor confidence in [0, 100].
    pub accuracy: f64,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a table from a cell grid. Extractors occasionally emit ragged
    /// rows; short rows are padded with empty cells to the widest row so the
    /// grid is always rectangular.
    pub fn new(page: u32, accuracy: f64, mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self {
            page,
            accuracy,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Reject tables the extractor was not confident about.
///
/// This is a hard stop for the document: a low-accuracy read of financial
/// data is unsafe to continue with.
pub fn check_accuracy(table: &RawTable, threshold: u32) -> Result<()> {
    tracing::info!(
        page = table.page,
        accuracy = table.accuracy,
        "PDF table read accuracy"
    );
    if table.accuracy < f64::from(threshold) {
        return Err(ReadError::InaccuratePdfRead {
            accuracy: table.accuracy,
            threshold,
        });
    }
    Ok(())
}
