use thiserror::Error;

/// Row-level normalization failures.
///
/// How these propagate is decided by the configured
/// [`RowErrorPolicy`](crate::pipeline::RowErrorPolicy): abort the document
/// or exclude the row and keep a record of it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("unparseable date {value:?} in column {column} (row {row})")]
    DateParse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("unparseable amount {value:?} in column {column} (row {row})")]
    AmountParse {
        row: usize,
        column: String,
        value: String,
    },
}

/// Document-level failures. All of these abort the run for the document
/// they occur in; partial financial data is never silently accepted.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("PDF table read accuracy {accuracy:.1} below threshold {threshold}")]
    InaccuratePdfRead { accuracy: f64, threshold: u32 },

    #[error("no recognized tables in document (unsupported layout?)")]
    EmptyResult,

    #[error(transparent)]
    Row(#[from] RowError),

    #[error("cannot resolve input path {path}: {source}")]
    PathResolution {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("table extraction failed: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, ReadError>;
