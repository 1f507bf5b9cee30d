use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use statement_core::{provider_config, Pipeline, PipelineOptions, Provider, ReportType};
use statement_ingest::{load_tables, ExtractorConfig, Input};
use tracing::warn;

mod config;
mod export;

#[derive(Parser, Debug)]
#[command(
    name = "statement-reader",
    version,
    about = "Parse financial institution statement PDFs into CSV"
)]
struct Cli {
    /// Financial institution the statements come from
    #[arg(value_enum)]
    provider: ProviderArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the tables from an input pdf to csv files, one per document
    Convert {
        /// Report type to look for
        #[arg(value_enum)]
        report_type: ReportTypeArg,

        /// Input pdf, pre-extracted .json table dump, or a directory of
        /// either
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for csv files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Statement year, for providers whose tables omit it
        #[arg(long)]
        year: Option<i32>,

        /// Config file (default: ./statement-reader.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ProviderArg {
    Vanguard,
    Capitalone,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Vanguard => Provider::Vanguard,
            ProviderArg::Capitalone => Provider::CapitalOne,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportTypeArg {
    ActivitySummary,
    Checking,
}

impl From<ReportTypeArg> for ReportType {
    fn from(arg: ReportTypeArg) -> Self {
        match arg {
            ReportTypeArg::ActivitySummary => ReportType::ActivitySummary,
            ReportTypeArg::Checking => ReportType::Checking,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            report_type,
            input,
            output,
            year,
            config,
        } => convert(
            cli.provider.into(),
            report_type.into(),
            input,
            output,
            year,
            config,
        ),
    }
}

fn convert(
    provider: Provider,
    report_type: ReportType,
    input: PathBuf,
    output: PathBuf,
    year: Option<i32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let Some(provider_cfg) = provider_config(provider, report_type) else {
        bail!(
            "{provider} does not support {report_type} reports \
             (supported: capitalone checking, vanguard activity-summary)"
        );
    };

    let cfg = config::load_config(config_path.as_deref())?;

    let statement_year = match year {
        Some(y) => y,
        None => {
            let y = chrono::Local::now().year();
            if provider_cfg.date_rule.needs_year() {
                warn!("no --year supplied; assuming statement year {y}");
            }
            y
        }
    };

    let input = Input::new(&input)?;
    fs::create_dir_all(&output)
        .with_context(|| format!("creating output directory {}", output.display()))?;

    let extractor = ExtractorConfig {
        command: cfg.extractor.command,
        pages: cfg.extractor.pages,
    };
    let mut options = PipelineOptions::new(statement_year);
    options.accuracy_threshold = cfg.pipeline.accuracy_threshold;
    options.row_error_policy = cfg.pipeline.row_error_policy;
    options.audit_unrecognized = cfg.pipeline.audit_unrecognized;
    let pipeline = Pipeline::new(&provider_cfg, options);

    for document in input.documents()? {
        let tables = load_tables(&document, &extractor)?;
        let outcome = pipeline
            .run(tables)
            .with_context(|| format!("processing {}", document.display()))?;

        let stem = document
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("statement");
        let out_path = output.join(format!("{stem}.{provider}.{report_type}.csv"));
        export::write_csv(&outcome.table, &out_path)?;

        println!(
            "Wrote {} rows to {}",
            outcome.table.rows.len(),
            out_path.display()
        );
        if !outcome.skipped.is_empty() {
            println!(
                "Skipped {} rows with parse errors (see log for details)",
                outcome.skipped.len()
            );
        }
        if !outcome.unrecognized.is_empty() {
            println!(
                "{} tables matched no known fingerprint",
                outcome.unrecognized.len()
            );
        }
    }

    Ok(())
}
