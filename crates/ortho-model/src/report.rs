//! Incorrect-symbol findings and per-run summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A character left outside the canonical alphabet after conversion.
///
/// `start` and `end` are byte offsets into the converted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectSymbol {
    pub symbol: String,
    pub start: usize,
    pub end: usize,
}

/// An incorrect symbol located in a dataset cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolOccurrence {
    pub column: String,
    /// 0-based data row (the header is not counted).
    pub row: usize,
    pub symbol: String,
    pub start: usize,
    pub end: usize,
}

/// Per-column outcome of a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    /// Cells whose converted text differs from the input.
    pub changed: usize,
    /// Cells with at least one incorrect symbol.
    pub flagged_cells: usize,
    /// Incorrect symbol -> number of occurrences.
    pub incorrect_symbols: BTreeMap<String, usize>,
}

impl ColumnSummary {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Self::default()
        }
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect_symbols.values().sum()
    }
}

/// Outcome of normalizing every target column of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    /// Only filled when symbol reporting is enabled.
    pub occurrences: Vec<SymbolOccurrence>,
}

impl NormalizationSummary {
    pub fn changed_count(&self) -> usize {
        self.columns.iter().map(|c| c.changed).sum()
    }

    pub fn incorrect_count(&self) -> usize {
        self.columns.iter().map(ColumnSummary::incorrect_count).sum()
    }

    pub fn has_incorrect_symbols(&self) -> bool {
        self.incorrect_count() > 0
    }

    /// Incorrect symbols across all columns with their total counts.
    pub fn symbol_totals(&self) -> BTreeMap<&str, usize> {
        let mut totals = BTreeMap::new();
        for column in &self.columns {
            for (symbol, count) in &column.incorrect_symbols {
                *totals.entry(symbol.as_str()).or_insert(0) += count;
            }
        }
        totals
    }
}
