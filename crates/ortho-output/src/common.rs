//! Shared helpers for output writers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Path next to `path` with the extension swapped, e.g. `data/database.xlsx`
/// for `data/database.csv`.
pub fn sibling_path(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}
