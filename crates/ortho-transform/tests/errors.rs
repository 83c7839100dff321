//! Error reporting for table compilation and column conversion.

use insta::assert_snapshot;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use ortho_model::{CorrespondenceRule, CorrespondenceTable};
use ortho_transform::{
    ConvertOptions, OrthoConverter, SymbolReportMode, TransformError, normalize_columns,
};

#[test]
fn empty_pattern_message() {
    let table = CorrespondenceTable::new(vec![
        CorrespondenceRule::new("c", "k"),
        CorrespondenceRule::inactive("", "a"),
        CorrespondenceRule::new("", "x"),
    ]);

    let err = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap_err();

    assert_snapshot!(err.to_string(), @"empty pattern in active correspondence table row 3");
}

#[test]
fn invalid_pattern_keeps_regex_source() {
    let table = CorrespondenceTable::new(vec![CorrespondenceRule::new("[кk", "к")]);

    let err = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap_err();

    match &err {
        TransformError::InvalidPattern { row, pattern, .. } => {
            assert_eq!(*row, 1);
            assert_eq!(pattern, "[кk");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn missing_column_message() {
    let df = DataFrame::new(vec![
        Series::new("answer".into(), &["cat"]).into_column(),
    ])
    .unwrap();
    let table = CorrespondenceTable::new(vec![CorrespondenceRule::new("c", "k")]);
    let converter = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap();

    let err = normalize_columns(&df, &converter, &["value"], SymbolReportMode::Skip).unwrap_err();

    assert_snapshot!(err.to_string(), @"column 'value' not found in dataset");
}
