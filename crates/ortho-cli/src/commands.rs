use anyhow::Result;

use ortho_cli::pipeline::{OutputConfig, RunConfig, run_pipeline};
use ortho_cli::types::RunResult;
use ortho_transform::ConvertOptions;

use crate::cli::RunArgs;

pub fn run_normalize(args: &RunArgs) -> Result<RunResult> {
    run_pipeline(&run_config(args))
}

pub fn run_config(args: &RunArgs) -> RunConfig {
    RunConfig {
        table: args.table.clone(),
        dataset: args.dataset.clone(),
        columns: args.columns.clone(),
        convert: ConvertOptions::default()
            .with_extra_symbols(args.extra_symbols.iter().cloned())
            .with_segment(args.segment),
        report_symbols: args.report_symbols,
        strict: args.strict,
        output: OutputConfig {
            csv: args.output_csv.clone(),
            xlsx: args.output_xlsx.clone(),
            write_xlsx: !args.no_xlsx,
            symbol_report: args.symbol_report.clone(),
            dry_run: args.dry_run,
        },
    }
}
