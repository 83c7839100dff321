//! Polars cell helpers.
//!
//! Datasets are read with every column typed as text, but cells still arrive
//! as `AnyValue`s (and nulls for missing fields). These helpers turn them into
//! plain strings for conversion and output.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to its text, `Null` becoming `""`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use ortho_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("кӀа")), "кӀа");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Reads every cell of a column as text, nulls becoming empty strings.
pub fn column_strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx)?));
    }
    Ok(values)
}

/// Reads every cell of a column as text, keeping missing cells as `None`.
pub fn column_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(match column.get(idx)? {
            AnyValue::Null => None,
            other => Some(any_to_string(other)),
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn column_strings_maps_nulls_to_empty() {
        let series = Series::new("answer".into(), &[Some("kat"), None, Some("dog")]);
        let df = DataFrame::new(vec![series.into_column()]).unwrap();

        let values = column_strings(&df, "answer").unwrap();

        assert_eq!(values, vec!["kat", "", "dog"]);
    }

    #[test]
    fn column_strings_missing_column_errors() {
        let column: Column = Series::new("answer".into(), &["kat"]).into_column();
        let df = DataFrame::new(vec![column]).unwrap();

        assert!(column_strings(&df, "value").is_err());
    }

    #[test]
    fn column_cells_keeps_nulls() {
        let series = Series::new("answer".into(), &[Some("kat"), None, Some("")]);
        let df = DataFrame::new(vec![series.into_column()]).unwrap();

        let values = column_cells(&df, "answer").unwrap();

        assert_eq!(
            values,
            vec![Some("kat".to_string()), None, Some(String::new())]
        );
    }
}
