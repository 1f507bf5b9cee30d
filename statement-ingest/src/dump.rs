//! The JSON table dump: handoff format between the extraction engine and
//! the pipeline.
//!
//! ```json
//! {
//!   "tables": [
//!     { "page": 1, "accuracy": 97.4, "rows": [["DATE", "AMOUNT"], ["Jan 05", "$4.50"]] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use statement_core::{RawTable, ReadError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDump {
    pub tables: Vec<DumpTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpTable {
    pub page: u32,
    pub accuracy: f64,
    pub rows: Vec<Vec<String>>,
}

impl TableDump {
    pub fn from_json(json: &str) -> Result<Self, ReadError> {
        serde_json::from_str(json)
            .map_err(|err| ReadError::Extraction(format!("bad table dump: {err}")))
    }

    pub fn from_file(path: &Path) -> Result<Self, ReadError> {
        let json = fs::read_to_string(path).map_err(|err| {
            ReadError::Extraction(format!("reading dump {}: {err}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Convert into pipeline tables, preserving document order.
    pub fn into_tables(self) -> Vec<RawTable> {
        self.tables
            .into_iter()
            .map(|t| RawTable::new(t.page, t.accuracy, t.rows))
            .collect()
    }
}
