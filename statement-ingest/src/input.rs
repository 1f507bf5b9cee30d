//! Input path handling.

use std::fs;
use std::path::{Path, PathBuf};

use statement_core::ReadError;

/// A statement input resolved to an absolute filesystem path.
///
/// Resolution happens before any extraction attempt, so a bad path fails
/// fast instead of mid-document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    path: PathBuf,
}

impl Input {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ReadError> {
        let path = path.as_ref();
        let resolved = path
            .canonicalize()
            .map_err(|source| ReadError::PathResolution {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { path: resolved })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The documents this input names: the file itself, or the `.pdf` and
    /// `.json` children of a directory, in name order.
    pub fn documents(&self) -> Result<Vec<PathBuf>, ReadError> {
        if !self.path.is_dir() {
            return Ok(vec![self.path.clone()]);
        }
        let entries = fs::read_dir(&self.path).map_err(|source| ReadError::PathResolution {
            path: self.path.display().to_string(),
            source,
        })?;
        let mut documents: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| {
                matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("pdf" | "json")
                )
            })
            .collect();
        documents.sort();
        Ok(documents)
    }
}
