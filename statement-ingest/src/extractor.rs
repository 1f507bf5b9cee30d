//! Subprocess adapter for the external PDF table extractor.
//!
//! The extractor binary owns all PDF specifics. Its contract: given a page
//! range and a PDF path, print a table dump (see [`crate::dump`]) on stdout
//! and exit zero.

use std::path::Path;
use std::process::Command;

use regex::Regex;
use statement_core::{RawTable, ReadError};
use tracing::info;

use crate::dump::TableDump;

pub const DEFAULT_EXTRACTOR: &str = "statement-extract";
pub const DEFAULT_PAGES: &str = "1-end";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Binary name or path, looked up on PATH.
    pub command: String,
    /// Page range handed to the extractor, e.g. "1-end" or "1,3-4".
    pub pages: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_EXTRACTOR.to_string(),
            pages: DEFAULT_PAGES.to_string(),
        }
    }
}

/// Load raw tables for one document. `.json` inputs are pre-extracted table
/// dumps (useful offline and in tests); anything else goes through the
/// extractor process.
pub fn load_tables(path: &Path, config: &ExtractorConfig) -> Result<Vec<RawTable>, ReadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(TableDump::from_file(path)?.into_tables()),
        _ => extract_tables(path, config),
    }
}

/// Run the extractor over a PDF and decode its stdout.
pub fn extract_tables(pdf: &Path, config: &ExtractorConfig) -> Result<Vec<RawTable>, ReadError> {
    validate_pages(&config.pages)?;

    let bin = which::which(&config.command).map_err(|_| {
        ReadError::Extraction(format!("extractor {:?} not found on PATH", config.command))
    })?;

    info!(extractor = %bin.display(), pages = %config.pages, pdf = %pdf.display(), "extracting tables");
    let output = Command::new(&bin)
        .arg("--pages")
        .arg(&config.pages)
        .arg(pdf)
        .output()
        .map_err(|err| ReadError::Extraction(format!("running {}: {err}", bin.display())))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReadError::Extraction(format!(
            "extractor exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(TableDump::from_json(&stdout)?.into_tables())
}

fn validate_pages(pages: &str) -> Result<(), ReadError> {
    let range = Regex::new(r"^\d+(?:-(?:\d+|end))?(?:,\d+(?:-(?:\d+|end))?)*$")
        .map_err(|err| ReadError::Extraction(err.to_string()))?;
    if !range.is_match(pages) {
        return Err(ReadError::Extraction(format!(
            "invalid page range {pages:?} (expected forms like \"1-end\" or \"1,3-4\")"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ranges() {
        for good in ["1-end", "1", "2-5", "1,3-4", "1-end,7"] {
            assert!(validate_pages(good).is_ok(), "{good:?} should be valid");
        }
        for bad in ["", "end", "1-", "a-b", "1;2"] {
            assert!(validate_pages(bad).is_err(), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn test_missing_extractor_is_an_extraction_error() {
        let config = ExtractorConfig {
            command: "definitely-not-installed-extractor".to_string(),
            pages: DEFAULT_PAGES.to_string(),
        };
        let err = extract_tables(Path::new("statement.pdf"), &config).unwrap_err();
        assert!(matches!(err, ReadError::Extraction(_)));
    }
}
