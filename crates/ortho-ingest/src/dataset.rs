//! Dataset loading into a Polars DataFrame.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::encoding::validate_encoding;
use crate::error::{IngestError, Result};

/// Reads a dataset CSV with every column typed as text.
///
/// Schema inference is disabled so that pass-through columns are written
/// back exactly as they were read.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}

/// Reads a dataset and checks that every required column is present.
pub fn read_dataset_with_columns<S: AsRef<str>>(path: &Path, required: &[S]) -> Result<DataFrame> {
    let df = read_dataset(path)?;
    require_columns(&df, required, path)?;
    Ok(df)
}

/// Fails with `MissingColumn` for the first required column not in `df`.
pub fn require_columns<S: AsRef<str>>(df: &DataFrame, required: &[S], path: &Path) -> Result<()> {
    for column in required {
        let column = column.as_ref();
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
