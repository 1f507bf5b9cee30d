//! Table classification against known schema fingerprints.
//!
//! Statement PDFs yield a mixed bag of tables: the one we want, split across
//! pages with slightly different headers, plus cover-page blurbs the
//! extractor reads as tables. Classification decides which is which before
//! any cell is interpreted.

use crate::table::RawTable;

/// Expected header-row cells identifying one page variant of a report table.
///
/// An empty string marks a placeholder column that exists only for visual
/// spacing in the source layout; every other cell names the canonical column
/// it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaFingerprint {
    pub variant: &'static str,
    pub header: &'static [&'static str],
}

/// Full-grid fingerprint of a decorative table (cover pages and similar)
/// that the extractor sometimes reads as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseFingerprint {
    pub label: &'static str,
    pub grid: &'static [&'static [&'static str]],
}

/// Semantic role assigned to a raw table by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Decorative content; contributes no rows.
    Noise,
    /// Matched schema fingerprint `variant` with its header at `header_row`.
    Schema { variant: usize, header_row: usize },
    /// No fingerprint matched; excluded from the result.
    Unrecognized,
}

/// A raw table annotated with its recognized role.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedFragment {
    pub table: RawTable,
    pub role: Role,
}

/// Classify one raw table.
///
/// Noise fingerprints are checked first, by cell-for-cell equality of the
/// whole grid. Schema fingerprints are checked by containment: the first row
/// (scanning top-to-bottom) whose cells equal the fingerprint header
/// elementwise marks the header. Statements routinely repeat boilerplate
/// above the header, so the header may sit at any row index.
///
/// An unmatched table is `Unrecognized`, never an error.
pub fn classify(
    table: RawTable,
    noise: &[NoiseFingerprint],
    schemas: &[SchemaFingerprint],
) -> ClassifiedFragment {
    if noise.iter().any(|fp| grid_matches(&table, fp)) {
        return ClassifiedFragment {
            table,
            role: Role::Noise,
        };
    }

    for (variant, fp) in schemas.iter().enumerate() {
        if let Some(header_row) = find_header_row(&table, fp) {
            return ClassifiedFragment {
                table,
                role: Role::Schema {
                    variant,
                    header_row,
                },
            };
        }
    }

    ClassifiedFragment {
        table,
        role: Role::Unrecognized,
    }
}

fn grid_matches(table: &RawTable, fp: &NoiseFingerprint) -> bool {
    table.row_count() == fp.grid.len()
        && table
            .rows()
            .iter()
            .zip(fp.grid)
            .all(|(row, want)| row.len() == want.len() && row.iter().eq(want.iter()))
}

fn find_header_row(table: &RawTable, fp: &SchemaFingerprint) -> Option<usize> {
    if table.width() != fp.header.len() {
        return None;
    }
    table
        .rows()
        .iter()
        .position(|row| row.iter().eq(fp.header.iter()))
}
