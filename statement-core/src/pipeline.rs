//! End-to-end pipeline driver: gate, classify, align, normalize, merge.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::align::align;
use crate::classify::{classify, Role};
use crate::error::{Result, RowError};
use crate::merge::{merge, ResultTable};
use crate::normalize::normalize_fragment;
use crate::provider::ProviderConfig;
use crate::table::{check_accuracy, RawTable, DEFAULT_ACCURACY_THRESHOLD};

/// What to do when a row's typed field fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowErrorPolicy {
    /// Abort the document on the first bad row. Partial financial data is
    /// unsafe to accept.
    #[default]
    Abort,
    /// Exclude the row from the result and record it in
    /// [`RunOutcome::skipped`].
    Skip,
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub accuracy_threshold: u32,
    pub row_error_policy: RowErrorPolicy,
    /// Log a warning for each table no fingerprint matched.
    pub audit_unrecognized: bool,
    /// Operative year for date rules that omit it.
    pub statement_year: i32,
}

impl PipelineOptions {
    pub fn new(statement_year: i32) -> Self {
        Self {
            accuracy_threshold: DEFAULT_ACCURACY_THRESHOLD,
            row_error_policy: RowErrorPolicy::default(),
            audit_unrecognized: true,
            statement_year,
        }
    }
}

/// A row excluded under [`RowErrorPolicy::Skip`]. Kept in the outcome so
/// dropped financial rows always leave a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Ordinal of the source table within the document.
    pub table: usize,
    pub error: RowError,
}

/// Result of one document run.
#[derive(Debug)]
pub struct RunOutcome {
    pub table: ResultTable,
    pub skipped: Vec<SkippedRow>,
    /// Ordinals of tables no fingerprint matched, for auditing.
    pub unrecognized: Vec<usize>,
}

pub struct Pipeline<'a> {
    config: &'a ProviderConfig,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a ProviderConfig, options: PipelineOptions) -> Self {
        Self { config, options }
    }

    /// Run every raw table of one document through the pipeline, in the
    /// order the source yielded them.
    pub fn run(&self, tables: impl IntoIterator<Item = RawTable>) -> Result<RunOutcome> {
        let mut fragments = Vec::new();
        let mut skipped = Vec::new();
        let mut unrecognized = Vec::new();

        for (ordinal, table) in tables.into_iter().enumerate() {
            check_accuracy(&table, self.options.accuracy_threshold)?;

            let fragment = classify(table, self.config.noise, self.config.schemas);
            match fragment.role {
                Role::Noise => {
                    info!(table = ordinal, "skipping decorative table");
                    continue;
                }
                Role::Unrecognized => {
                    if self.options.audit_unrecognized {
                        warn!(table = ordinal, "table matched no known fingerprint");
                    }
                    unrecognized.push(ordinal);
                    continue;
                }
                Role::Schema {
                    variant,
                    header_row,
                } => {
                    info!(
                        table = ordinal,
                        variant = self.config.schemas[variant].variant,
                        header_row,
                        "recognized table"
                    );
                }
            }

            let Some(aligned) = align(fragment, self.config) else {
                continue;
            };

            let rows = match self.options.row_error_policy {
                RowErrorPolicy::Abort => normalize_fragment(
                    &aligned,
                    self.config.columns,
                    self.config.date_rule,
                    self.options.statement_year,
                )?,
                RowErrorPolicy::Skip => {
                    let mut kept = Vec::with_capacity(aligned.rows.len());
                    for (row, cells) in aligned.rows.iter().enumerate() {
                        match crate::normalize::normalize_row(
                            row,
                            cells,
                            self.config.columns,
                            self.config.date_rule,
                            self.options.statement_year,
                        ) {
                            Ok(normalized) => kept.push(normalized),
                            Err(error) => {
                                warn!(table = ordinal, %error, "skipping row");
                                skipped.push(SkippedRow {
                                    table: ordinal,
                                    error,
                                });
                            }
                        }
                    }
                    kept
                }
            };
            fragments.push(rows);
        }

        let table = merge(self.config, fragments)?;
        Ok(RunOutcome {
            table,
            skipped,
            unrecognized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;
    use crate::provider::{provider_config, Provider, ReportType};

    fn grid(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn capone_page(accuracy: f64, data: &[&[&str]]) -> RawTable {
        let mut rows = vec![vec![
            "DATE".to_string(),
            "DESCRIPTION".to_string(),
            "CATEGORY".to_string(),
            "AMOUNT".to_string(),
            "BALANCE".to_string(),
        ]];
        rows.extend(grid(data));
        RawTable::new(1, accuracy, rows)
    }

    fn config() -> ProviderConfig {
        provider_config(Provider::CapitalOne, ReportType::Checking).unwrap()
    }

    #[test]
    fn test_low_accuracy_aborts_run() {
        let config = config();
        let pipeline = Pipeline::new(&config, PipelineOptions::new(2024));
        let tables = vec![
            capone_page(96.0, &[&["Jan 05", "Coffee", "Dining", "$4.50", "$995.50"]]),
            capone_page(12.0, &[&["Jan 06", "Tea", "Dining", "$3.00", "$992.50"]]),
        ];
        assert!(matches!(
            pipeline.run(tables),
            Err(ReadError::InaccuratePdfRead { .. })
        ));
    }

    #[test]
    fn test_unrecognized_only_document_is_empty_result() {
        let config = config();
        let pipeline = Pipeline::new(&config, PipelineOptions::new(2024));
        let tables = vec![RawTable::new(1, 96.0, grid(&[&["TOTALS", "FOR", "YEAR"]]))];
        let err = pipeline.run(tables).unwrap_err();
        assert!(matches!(err, ReadError::EmptyResult));
    }

    #[test]
    fn test_abort_policy_surfaces_first_bad_row() {
        let config = config();
        let pipeline = Pipeline::new(&config, PipelineOptions::new(2024));
        let tables = vec![capone_page(
            96.0,
            &[
                &["Jan 05", "Coffee", "Dining", "$4.50", "$995.50"],
                &["not a date", "Tea", "Dining", "$3.00", "$992.50"],
            ],
        )];
        let err = pipeline.run(tables).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Row(RowError::DateParse { row: 1, .. })
        ));
    }

    #[test]
    fn test_skip_policy_records_every_bad_row() {
        let config = config();
        let mut options = PipelineOptions::new(2024);
        options.row_error_policy = RowErrorPolicy::Skip;
        let pipeline = Pipeline::new(&config, options);
        let tables = vec![capone_page(
            96.0,
            &[
                &["Jan 05", "Coffee", "Dining", "$4.50", "$995.50"],
                &["not a date", "Tea", "Dining", "$3.00", "$992.50"],
                &["Jan 07", "Lunch", "Dining", "not money", "$980.00"],
            ],
        )];
        let outcome = pipeline.run(tables).unwrap();
        assert_eq!(outcome.table.rows.len(), 1);
        assert_eq!(outcome.skipped.len(), 2);
        assert!(matches!(
            outcome.skipped[0].error,
            RowError::DateParse { row: 1, .. }
        ));
        assert!(matches!(
            outcome.skipped[1].error,
            RowError::AmountParse { row: 2, .. }
        ));
    }

    #[test]
    fn test_unrecognized_tables_are_audited_not_fatal() {
        let config = config();
        let pipeline = Pipeline::new(&config, PipelineOptions::new(2024));
        let tables = vec![
            RawTable::new(1, 96.0, grid(&[&["TOTALS", "FOR", "YEAR"]])),
            capone_page(96.0, &[&["Jan 05", "Coffee", "Dining", "$4.50", "$995.50"]]),
        ];
        let outcome = pipeline.run(tables).unwrap();
        assert_eq!(outcome.unrecognized, vec![0]);
        assert_eq!(outcome.table.rows.len(), 1);
    }
}
