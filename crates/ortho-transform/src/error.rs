//! Error types for orthography conversion.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while compiling a correspondence table or converting a dataset.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A `letter` cell is not a valid regular expression.
    #[error("invalid pattern '{pattern}' in correspondence table row {row}: {source}")]
    InvalidPattern {
        /// 1-based data row in the table.
        row: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An active rule has an empty `letter` cell.
    #[error("empty pattern in active correspondence table row {row}")]
    EmptyPattern { row: usize },

    /// The alphabet could not be turned into a symbol pattern.
    #[error("failed to build symbol pattern: {0}")]
    SymbolPattern(#[source] regex::Error),

    #[error("column '{0}' not found in dataset")]
    ColumnNotFound(String),

    #[error(transparent)]
    PolarsError(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
