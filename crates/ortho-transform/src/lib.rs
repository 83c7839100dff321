//! Orthography conversion crate.
//!
//! Compiles a correspondence table into a reusable [`OrthoConverter`] and
//! applies it to text or to the target columns of a Polars `DataFrame`.
//!
//! # Example
//!
//! ```
//! use ortho_model::{CorrespondenceRule, CorrespondenceTable};
//! use ortho_transform::{ConvertOptions, OrthoConverter};
//!
//! let table = CorrespondenceTable::new(vec![CorrespondenceRule::new("c", "k")]);
//! let converter = OrthoConverter::new(&table, &ConvertOptions::default())?;
//!
//! assert_eq!(converter.convert("cat-dog"), "kat-dog");
//! # Ok::<(), ortho_transform::TransformError>(())
//! ```
//!
//! The symbol validator is opt-in: [`OrthoConverter::convert_with_issues`]
//! and [`SymbolReportMode::Collect`] report characters left outside the
//! canonical alphabet without treating them as errors.

mod converter;
mod error;
mod executor;
mod symbols;

pub use converter::{ConvertOptions, OrthoConverter, WORD_SENTINEL, convert_to_ortho};
pub use error::{Result, TransformError};
pub use executor::{NormalizationOutcome, SymbolReportMode, normalize_columns};
pub use symbols::{SymbolValidator, find_incorrect_symbols};
