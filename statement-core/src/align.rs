//! Alignment of recognized fragments onto the canonical column schema.

use crate::classify::{ClassifiedFragment, Role};
use crate::provider::ProviderConfig;

/// A fragment's data rows projected onto the canonical schema.
///
/// `rows[r][c]` holds the raw text for canonical column `c`; `None` where
/// the matched page variant has no such column. Row indices restart at 0 for
/// every fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTable {
    pub variant: &'static str,
    pub page: u32,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Slice a recognized fragment to the rows strictly below its header and
/// rename columns positionally to the canonical names.
///
/// The header row and any boilerplate above it are dropped. Placeholder
/// fingerprint columns are dropped with them; canonical columns the variant
/// lacks come out as `None`. Fragments without a schema role yield `None`
/// (the pipeline filters those out before alignment).
pub fn align(fragment: ClassifiedFragment, config: &ProviderConfig) -> Option<AlignedTable> {
    let Role::Schema {
        variant,
        header_row,
    } = fragment.role
    else {
        return None;
    };
    let fp = &config.schemas[variant];

    // Source position of each canonical column in this variant, by header
    // cell name.
    let positions: Vec<Option<usize>> = config
        .columns
        .iter()
        .map(|col| fp.header.iter().position(|cell| *cell == col.name))
        .collect();

    let rows = fragment.table.rows()[header_row + 1..]
        .iter()
        .map(|row| {
            positions
                .iter()
                .map(|pos| pos.map(|i| row[i].clone()))
                .collect()
        })
        .collect();

    Some(AlignedTable {
        variant: fp.variant,
        page: fragment.table.page,
        rows,
    })
}
