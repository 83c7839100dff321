use std::path::PathBuf;

use ortho_model::NormalizationSummary;

/// Files written by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutputs {
    pub csv: Option<PathBuf>,
    pub xlsx: Option<PathBuf>,
    pub symbol_report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunResult {
    pub table: PathBuf,
    pub dataset: PathBuf,
    /// Rows in the correspondence table.
    pub rules: usize,
    pub active_rules: usize,
    pub alphabet_size: usize,
    pub segment: bool,
    pub report_symbols: bool,
    pub summary: NormalizationSummary,
    pub outputs: RunOutputs,
    pub dry_run: bool,
    /// Strict mode found incorrect symbols and withheld the dataset outputs.
    pub blocked: bool,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.blocked
    }
}
