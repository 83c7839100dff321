//! Dataset output for the orthography unifier.
//!
//! The converted dataset is persisted twice: as CSV (usually overwriting the
//! input) and as a single-sheet XLSX workbook next to it.

mod common;
mod csv;
mod error;
mod xlsx;

pub use common::{ensure_parent_dir, sibling_path};
pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use xlsx::{SHEET_NAME, write_xlsx};
