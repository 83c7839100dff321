//! The normalization run: load the table and dataset, convert the target
//! columns, then write the dataset and the optional symbol report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{Level, debug, info, info_span, trace, warn};

use ortho_common::column_strings;
use ortho_ingest::{load_correspondence_table, read_dataset_with_columns};
use ortho_model::{DEFAULT_TARGET_COLUMNS, NormalizationSummary};
use ortho_output::{ensure_parent_dir, sibling_path, write_csv, write_xlsx};
use ortho_transform::{ConvertOptions, OrthoConverter, SymbolReportMode, normalize_columns};

use crate::logging::redact_value;
use crate::types::{RunOutputs, RunResult};

pub const DEFAULT_TABLE_PATH: &str = "scripts/rutul_ortho_correspondencies.csv";
pub const DEFAULT_DATASET_PATH: &str = "data/database.csv";

/// Changed cells traced per column.
const TRACE_SAMPLE_LIMIT: usize = 20;

/// Where a run writes its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// CSV destination; the dataset itself when `None`.
    pub csv: Option<PathBuf>,
    /// XLSX destination; the dataset path with an `.xlsx` extension when `None`.
    pub xlsx: Option<PathBuf>,
    pub write_xlsx: bool,
    pub symbol_report: Option<PathBuf>,
    pub dry_run: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: None,
            xlsx: None,
            write_xlsx: true,
            symbol_report: None,
            dry_run: false,
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self, dataset: &Path) -> PathBuf {
        self.csv.clone().unwrap_or_else(|| dataset.to_path_buf())
    }

    pub fn xlsx_path(&self, dataset: &Path) -> Option<PathBuf> {
        if !self.write_xlsx {
            return None;
        }
        Some(
            self.xlsx
                .clone()
                .unwrap_or_else(|| sibling_path(dataset, "xlsx")),
        )
    }
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub table: PathBuf,
    pub dataset: PathBuf,
    pub columns: Vec<String>,
    pub convert: ConvertOptions,
    pub report_symbols: bool,
    /// Withhold the dataset outputs when any incorrect symbol is found.
    pub strict: bool,
    pub output: OutputConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_PATH, DEFAULT_DATASET_PATH)
    }
}

impl RunConfig {
    pub fn new(table: impl Into<PathBuf>, dataset: impl Into<PathBuf>) -> Self {
        Self {
            table: table.into(),
            dataset: dataset.into(),
            columns: DEFAULT_TARGET_COLUMNS.iter().map(ToString::to_string).collect(),
            convert: ConvertOptions::default(),
            report_symbols: false,
            strict: false,
            output: OutputConfig::default(),
        }
    }

    /// Strict mode and a symbol report both need the validator.
    pub fn report_mode(&self) -> SymbolReportMode {
        if self.report_symbols || self.strict || self.output.symbol_report.is_some() {
            SymbolReportMode::Collect
        } else {
            SymbolReportMode::Skip
        }
    }
}

/// Run the whole normalization.
pub fn run_pipeline(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("run", dataset = %config.dataset.display());
    let _guard = span.enter();
    let run_start = Instant::now();
    let report_mode = config.report_mode();

    let stage_start = Instant::now();
    let table = load_correspondence_table(&config.table).with_context(|| {
        format!(
            "failed to load correspondence table {}",
            config.table.display()
        )
    })?;
    let converter = OrthoConverter::new(&table, &config.convert)
        .with_context(|| format!("invalid correspondence table {}", config.table.display()))?;
    info!(
        rules = table.len(),
        active_rules = converter.rule_count(),
        alphabet = converter.alphabet().len(),
        segment = converter.segments(),
        duration_ms = stage_start.elapsed().as_millis(),
        "compiled correspondence table"
    );

    let stage_start = Instant::now();
    let source = read_dataset_with_columns(&config.dataset, &config.columns)
        .with_context(|| format!("failed to load dataset {}", config.dataset.display()))?;
    info!(
        rows = source.height(),
        columns = source.width(),
        duration_ms = stage_start.elapsed().as_millis(),
        "loaded dataset"
    );

    let stage_start = Instant::now();
    let outcome = normalize_columns(&source, &converter, &config.columns, report_mode)
        .context("failed to normalize target columns")?;
    info!(
        changed = outcome.summary.changed_count(),
        incorrect = outcome.summary.incorrect_count(),
        duration_ms = stage_start.elapsed().as_millis(),
        "normalized dataset"
    );
    if tracing::enabled!(Level::TRACE) {
        trace_changes(&source, &outcome.data, &config.columns);
    }
    for (symbol, count) in outcome.summary.symbol_totals() {
        warn!(symbol, count, "incorrect symbol after conversion");
    }

    let mut outputs = RunOutputs::default();
    if let Some(path) = &config.output.symbol_report {
        write_symbol_report(&outcome.summary, path)
            .with_context(|| format!("failed to write symbol report {}", path.display()))?;
        outputs.symbol_report = Some(path.clone());
    }

    let blocked = config.strict && outcome.summary.has_incorrect_symbols();
    if blocked {
        warn!(
            incorrect = outcome.summary.incorrect_count(),
            "strict mode: dataset outputs not written"
        );
    } else if config.output.dry_run {
        info!("dry run: dataset outputs not written");
    } else {
        let stage_start = Instant::now();
        let csv_path = config.output.csv_path(&config.dataset);
        write_csv(&outcome.data, &csv_path)?;
        outputs.csv = Some(csv_path);
        if let Some(xlsx_path) = config.output.xlsx_path(&config.dataset) {
            write_xlsx(&outcome.data, &xlsx_path)?;
            outputs.xlsx = Some(xlsx_path);
        }
        info!(
            duration_ms = stage_start.elapsed().as_millis(),
            "wrote dataset outputs"
        );
    }

    info!(
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        table: config.table.clone(),
        dataset: config.dataset.clone(),
        rules: table.len(),
        active_rules: converter.rule_count(),
        alphabet_size: converter.alphabet().len(),
        segment: converter.segments(),
        report_symbols: report_mode == SymbolReportMode::Collect,
        summary: outcome.summary,
        outputs,
        dry_run: config.output.dry_run,
        blocked,
    })
}

/// Write the run summary, occurrences included, as pretty JSON.
pub fn write_symbol_report(summary: &NormalizationSummary, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote symbol report");
    Ok(())
}

fn trace_changes(before: &DataFrame, after: &DataFrame, columns: &[String]) {
    for column in columns {
        let (Ok(old), Ok(new)) = (column_strings(before, column), column_strings(after, column))
        else {
            continue;
        };
        let changed = old
            .iter()
            .zip(&new)
            .enumerate()
            .filter(|&(_, (from, to))| from != to)
            .take(TRACE_SAMPLE_LIMIT);
        for (row, (from, to)) in changed {
            trace!(
                column = column.as_str(),
                row,
                from = redact_value(from),
                to = redact_value(to),
                "converted cell"
            );
        }
    }
}
