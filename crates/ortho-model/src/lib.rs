//! Data model for orthography unification.
//!
//! Plain types shared by the ingest, transform, output and CLI crates:
//! correspondence rules, the canonical alphabet, and symbol reports.

pub mod alphabet;
pub mod report;
pub mod rule;

pub use alphabet::{Alphabet, DEFAULT_EXTRA_SYMBOLS};
pub use report::{ColumnSummary, IncorrectSymbol, NormalizationSummary, SymbolOccurrence};
pub use rule::{ACTIVE_FLAG, CorrespondenceRule, CorrespondenceTable};

/// Columns normalized when none are given explicitly.
pub const DEFAULT_TARGET_COLUMNS: [&str; 2] = ["answer", "value"];
