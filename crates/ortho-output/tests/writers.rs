//! Output writer tests.

use std::fs;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use ortho_ingest::read_dataset;
use ortho_output::{OutputError, SHEET_NAME, write_csv, write_xlsx};

fn dataset() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("id".into(), &["001", "002", "003"]).into_column(),
        Series::new("answer".into(), &[Some("кат"), None, Some("a, b")]).into_column(),
        Series::new("value".into(), &["к а т", "", "\"q\""]).into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

/// Worksheet cells as text, `None` for blank cells.
fn sheet_rows(path: &Path) -> Vec<Vec<Option<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(SHEET_NAME).unwrap();
    assert_eq!(range.start(), Some((0, 0)));
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => None,
                    Data::String(text) => Some(text.clone()),
                    other => panic!("non-text cell {other:?}"),
                })
                .collect()
        })
        .collect()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn csv_keeps_rows_columns_and_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/database.csv");

    write_csv(&dataset(), &path).unwrap();
    let back = read_dataset(&path).unwrap();

    assert_eq!(back.height(), 3);
    assert_eq!(back.get_column_names_str(), vec!["id", "answer", "value"]);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("id,answer,value\n"));
    assert!(text.contains("001,кат,к а т\n"));
    assert!(text.contains("\"a, b\""));
}

#[test]
fn csv_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.csv");
    fs::write(&path, "stale,content\n1,2\n3,4\n5,6\n7,8\n").unwrap();

    write_csv(&dataset(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn xlsx_is_written_as_zip_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/database.xlsx");

    write_xlsx(&dataset(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn xlsx_holds_header_and_every_row_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.xlsx");
    let df = dataset();

    write_xlsx(&df, &path).unwrap();
    let rows = sheet_rows(&path);

    assert_eq!(rows.len(), df.height() + 1);
    assert_eq!(rows[0], vec![text("id"), text("answer"), text("value")]);
    assert_eq!(rows[1], vec![text("001"), text("кат"), text("к а т")]);
    // Null and empty cells are both left blank.
    assert_eq!(rows[2], vec![text("002"), None, None]);
    assert_eq!(rows[3], vec![text("003"), text("a, b"), text("\"q\"")]);
}

#[test]
fn xlsx_under_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    // A file where a directory is expected.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = write_xlsx(&dataset(), &blocker.join("database.xlsx")).unwrap_err();

    assert!(matches!(err, OutputError::CreateDir { .. }));
}
