//! XLSX dataset output.

use std::path::Path;

use polars::prelude::DataFrame;
use rust_xlsxwriter::{Format, Workbook};

use ortho_common::any_to_string;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Worksheet name used for the dataset.
pub const SHEET_NAME: &str = "Sheet1";

/// Rows per worksheet, header included.
const MAX_ROWS: usize = 1_048_576;

/// Columns per worksheet.
const MAX_COLUMNS: usize = 16_384;

/// Write `df` to a single-sheet workbook.
///
/// The first row holds the column names in bold; no index column is written.
/// Every cell is written as text and empty cells are left blank.
pub fn write_xlsx(df: &DataFrame, path: &Path) -> Result<()> {
    let rows = df.height();
    let columns = df.width();
    if rows + 1 > MAX_ROWS || columns > MAX_COLUMNS {
        return Err(OutputError::SheetTooLarge { rows, columns });
    }
    ensure_parent_dir(path)?;

    let xlsx_error = |source| OutputError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        // Bounds checked above.
        let col = col_idx as u16;
        worksheet
            .write_string_with_format(0, col, column.name().as_str(), &header_format)
            .map_err(xlsx_error)?;
        for row_idx in 0..rows {
            let text = any_to_string(column.get(row_idx)?);
            if text.is_empty() {
                continue;
            }
            worksheet
                .write_string(row_idx as u32 + 1, col, text)
                .map_err(xlsx_error)?;
        }
    }

    workbook.save(path).map_err(xlsx_error)?;
    tracing::debug!(path = %path.display(), rows, columns, "wrote XLSX");
    Ok(())
}
