//! CLI argument definitions for the orthography unifier.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ortho-unify",
    version,
    about = "Unify orthographic variants in a linguistic dataset",
    long_about = "Rewrite the target columns of a dataset into one canonical alphabet\n\
                  using a letter correspondence table.\n\n\
                  Writes the dataset back as CSV and XLSX, optionally reporting\n\
                  characters that fall outside the alphabet."
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Correspondence table CSV with letter, replace and replace_to columns.
    #[arg(
        long = "table",
        value_name = "PATH",
        default_value = "scripts/rutul_ortho_correspondencies.csv"
    )]
    pub table: PathBuf,

    /// Dataset CSV to normalize.
    #[arg(long = "dataset", value_name = "PATH", default_value = "data/database.csv")]
    pub dataset: PathBuf,

    /// CSV output path (default: overwrite the dataset).
    #[arg(long = "output-csv", value_name = "PATH")]
    pub output_csv: Option<PathBuf>,

    /// XLSX output path (default: the dataset path with an .xlsx extension).
    #[arg(long = "output-xlsx", value_name = "PATH")]
    pub output_xlsx: Option<PathBuf>,

    /// Column to normalize; repeat for several columns.
    #[arg(long = "column", value_name = "NAME", default_values = ["answer", "value"])]
    pub columns: Vec<String>,

    /// Symbol accepted as correct besides the table targets; repeatable.
    #[arg(
        long = "extra-symbol",
        value_name = "SYMBOL",
        allow_hyphen_values = true,
        default_values = ["-", "—"]
    )]
    pub extra_symbols: Vec<String>,

    /// Split output into space-separated symbols, words separated by two spaces.
    #[arg(long = "segment")]
    pub segment: bool,

    /// Report characters left outside the alphabet after conversion.
    #[arg(long = "report-symbols")]
    pub report_symbols: bool,

    /// Do not write the dataset when any incorrect symbol is found.
    ///
    /// Implies --report-symbols. The run exits with status 1 when outputs
    /// are withheld.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Write the incorrect-symbol report as JSON (implies --report-symbols).
    #[arg(long = "symbol-report", value_name = "PATH")]
    pub symbol_report: Option<PathBuf>,

    /// Convert and report without writing the dataset.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the XLSX output.
    #[arg(long = "no-xlsx")]
    pub no_xlsx: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dataset_layout() {
        let cli = Cli::try_parse_from(["ortho-unify"]).unwrap();

        assert_eq!(
            cli.run.table,
            PathBuf::from("scripts/rutul_ortho_correspondencies.csv")
        );
        assert_eq!(cli.run.dataset, PathBuf::from("data/database.csv"));
        assert_eq!(cli.run.columns, vec!["answer", "value"]);
        assert_eq!(cli.run.extra_symbols, vec!["-", "—"]);
        assert!(!cli.run.segment);
        assert!(cli.run.output_csv.is_none());
    }

    #[test]
    fn repeated_flags_replace_defaults() {
        let cli = Cli::try_parse_from([
            "ortho-unify",
            "--column",
            "gloss",
            "--column",
            "answer",
            "--extra-symbol",
            "-",
            "--extra-symbol",
            "'",
            "--segment",
        ])
        .unwrap();

        assert_eq!(cli.run.columns, vec!["gloss", "answer"]);
        assert_eq!(cli.run.extra_symbols, vec!["-", "'"]);
        assert!(cli.run.segment);
    }

    #[test]
    fn logging_flags_parse() {
        let cli = Cli::try_parse_from([
            "ortho-unify",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-data",
        ])
        .unwrap();

        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.log_data);
    }
}
