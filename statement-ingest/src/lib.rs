//! statement-ingest: input path resolution and the raw-table source
//! boundary.
//!
//! The pipeline does not read PDFs itself. An external extractor process
//! turns a document into a JSON table dump (grids + accuracy scores); this
//! crate resolves input paths, invokes the extractor, and decodes its output
//! into [`statement_core::RawTable`]s.

pub mod dump;
pub mod extractor;
pub mod input;

pub use dump::{DumpTable, TableDump};
pub use extractor::{extract_tables, load_tables, ExtractorConfig};
pub use input::Input;
