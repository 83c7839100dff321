//! Correspondence table loading.
//!
//! The table is a CSV with `letter`, `replace` and `replace_to` columns.
//! Rows keep their file order; pattern and target cells are taken verbatim.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use ortho_model::{CorrespondenceRule, CorrespondenceTable};

use crate::encoding::validate_encoding;
use crate::error::{IngestError, Result};

pub const LETTER_COLUMN: &str = "letter";
pub const REPLACE_COLUMN: &str = "replace";
pub const REPLACE_TO_COLUMN: &str = "replace_to";

/// Load a correspondence table from a CSV file.
pub fn load_correspondence_table(path: &Path) -> Result<CorrespondenceTable> {
    validate_encoding(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    if headers.iter().all(|h| normalize_header(h).is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let letter = header_index(&headers, LETTER_COLUMN, path)?;
    let replace = header_index(&headers, REPLACE_COLUMN, path)?;
    let replace_to = header_index(&headers, REPLACE_TO_COLUMN, path)?;

    let mut table = CorrespondenceTable::default();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        table.push(CorrespondenceRule {
            letter: field(&record, letter),
            replace: field(&record, replace),
            replace_to: field(&record, replace_to),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rules = table.len(),
        active = table.active_rules().count(),
        "loaded correspondence table"
    );
    Ok(table)
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

fn header_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| normalize_header(h) == column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().to_string()
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = err.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
