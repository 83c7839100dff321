//! CSV dataset output.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Write `df` as CSV with a header row and no index column.
///
/// An existing file at `path` is overwritten.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut data = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut data)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), rows = df.height(), "wrote CSV");
    Ok(())
}
