//! Shared utilities for the orthography unifier crates.
//!
//! Polars cell helpers used by the transform and output crates.

pub mod cells;

pub use cells::{any_to_string, column_cells, column_strings};
