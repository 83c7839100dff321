//! DataFrame conversion.
//!
//! Applies an [`OrthoConverter`] to every cell of the target columns and
//! leaves every other column untouched.

use polars::prelude::{DataFrame, NamedFrom, Series};

use ortho_common::column_cells;
use ortho_model::{ColumnSummary, NormalizationSummary, SymbolOccurrence};

use crate::converter::OrthoConverter;
use crate::error::{Result, TransformError};

/// Whether incorrect symbols are collected while converting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymbolReportMode {
    /// Convert only.
    #[default]
    Skip,
    /// Run the symbol validator on every converted cell.
    Collect,
}

/// A converted dataset with its run summary.
#[derive(Debug, Clone)]
pub struct NormalizationOutcome {
    pub data: DataFrame,
    pub summary: NormalizationSummary,
}

/// Convert the target columns of `source_df`.
///
/// Column order, row order and all other columns are preserved. Missing
/// cells stay missing and are not counted as changed.
pub fn normalize_columns<S: AsRef<str>>(
    source_df: &DataFrame,
    converter: &OrthoConverter,
    columns: &[S],
    mode: SymbolReportMode,
) -> Result<NormalizationOutcome> {
    let mut data = source_df.clone();
    let mut summary = NormalizationSummary {
        rows: source_df.height(),
        ..NormalizationSummary::default()
    };

    for column in columns {
        let column = column.as_ref();
        if source_df.column(column).is_err() {
            return Err(TransformError::ColumnNotFound(column.to_string()));
        }
        let values = column_cells(source_df, column)?;
        let (converted, column_summary) =
            convert_column(column, &values, converter, mode, &mut summary.occurrences);

        tracing::debug!(
            column,
            changed = column_summary.changed,
            flagged = column_summary.flagged_cells,
            "converted column"
        );
        data.with_column(Series::new(column.into(), converted))?;
        summary.columns.push(column_summary);
    }

    Ok(NormalizationOutcome { data, summary })
}

fn convert_column(
    column: &str,
    values: &[Option<String>],
    converter: &OrthoConverter,
    mode: SymbolReportMode,
    occurrences: &mut Vec<SymbolOccurrence>,
) -> (Vec<Option<String>>, ColumnSummary) {
    let mut summary = ColumnSummary::new(column);
    let mut converted = Vec::with_capacity(values.len());

    for (row, raw) in values.iter().enumerate() {
        let Some(raw) = raw else {
            converted.push(None);
            continue;
        };
        let (text, issues) = match mode {
            SymbolReportMode::Skip => (converter.convert(raw), Vec::new()),
            SymbolReportMode::Collect => converter.convert_with_issues(raw),
        };
        if text != *raw {
            summary.changed += 1;
        }
        if !issues.is_empty() {
            summary.flagged_cells += 1;
        }
        for issue in issues {
            *summary
                .incorrect_symbols
                .entry(issue.symbol.clone())
                .or_insert(0) += 1;
            occurrences.push(SymbolOccurrence {
                column: column.to_string(),
                row,
                symbol: issue.symbol,
                start: issue.start,
                end: issue.end,
            });
        }
        converted.push(Some(text));
    }

    (converted, summary)
}
