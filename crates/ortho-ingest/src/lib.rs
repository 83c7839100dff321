//! Input loading for the orthography unifier.
//!
//! - **Correspondence table**: CSV of `letter`, `replace`, `replace_to` rules,
//!   read with the `csv` crate into an ordered [`ortho_model::CorrespondenceTable`].
//! - **Dataset**: CSV read into a Polars `DataFrame` with all columns as text.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ortho_ingest::{load_correspondence_table, read_dataset_with_columns};
//!
//! let table = load_correspondence_table(Path::new("scripts/rutul_ortho_correspondencies.csv"))?;
//! let df = read_dataset_with_columns(Path::new("data/database.csv"), &["answer", "value"])?;
//! ```

mod dataset;
mod encoding;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use dataset::{read_dataset, read_dataset_with_columns, require_columns};
pub use encoding::validate_encoding;
pub use table::{LETTER_COLUMN, REPLACE_COLUMN, REPLACE_TO_COLUMN, load_correspondence_table};
