use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use statement_core::{RowErrorPolicy, DEFAULT_ACCURACY_THRESHOLD};
use statement_ingest::extractor::{DEFAULT_EXTRACTOR, DEFAULT_PAGES};

pub const DEFAULT_CONFIG_FILE: &str = "statement-reader.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineSection,
    pub extractor: ExtractorSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    pub accuracy_threshold: u32,
    pub row_error_policy: RowErrorPolicy,
    pub audit_unrecognized: bool,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            accuracy_threshold: DEFAULT_ACCURACY_THRESHOLD,
            row_error_policy: RowErrorPolicy::default(),
            audit_unrecognized: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorSection {
    pub command: String,
    pub pages: String,
}

impl Default for ExtractorSection {
    fn default() -> Self {
        Self {
            command: DEFAULT_EXTRACTOR.to_string(),
            pages: DEFAULT_PAGES.to_string(),
        }
    }
}

/// Load configuration. An explicitly passed path must exist; the default
/// `statement-reader.toml` is optional and falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (path, required) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };
    if !path.exists() {
        if required {
            bail!("config file not found: {}", path.display());
        }
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
