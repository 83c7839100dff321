use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ortho_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!(
        "Table: {} ({} rules, {} active, {} symbols)",
        result.table.display(),
        result.rules,
        result.active_rules,
        result.alphabet_size
    );
    println!(
        "Dataset: {} ({} rows)",
        result.dataset.display(),
        result.summary.rows
    );
    if result.segment {
        println!("Segmentation: on");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Cells"),
        header_cell("Changed"),
        header_cell("Flagged"),
        header_cell("Incorrect"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &result.summary.columns {
        table.add_row(vec![
            Cell::new(&column.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(result.summary.rows),
            count_cell(Some(column.changed), Color::Green),
            report_cell(result, column.flagged_cells),
            report_cell(result, column.incorrect_count()),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(result.summary.rows * result.summary.columns.len())
            .add_attribute(Attribute::Bold),
        count_cell(Some(result.summary.changed_count()), Color::Green),
        report_cell(
            result,
            result
                .summary
                .columns
                .iter()
                .map(|c| c.flagged_cells)
                .sum(),
        ),
        report_cell(result, result.summary.incorrect_count()),
    ]);
    println!("{table}");

    if result.report_symbols && result.summary.has_incorrect_symbols() {
        print_symbols(result);
    }
    print_outputs(result);
}

fn print_symbols(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Symbol"),
        header_cell("Code point"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (symbol, count) in result.summary.symbol_totals() {
        table.add_row(vec![
            Cell::new(symbol).add_attribute(Attribute::Bold),
            dim_cell(code_points(symbol)),
            Cell::new(count).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Incorrect symbols:");
    println!("{table}");
}

fn print_outputs(result: &RunResult) {
    println!();
    if let Some(path) = &result.outputs.csv {
        println!("CSV: {}", path.display());
    }
    if let Some(path) = &result.outputs.xlsx {
        println!("XLSX: {}", path.display());
    }
    if let Some(path) = &result.outputs.symbol_report {
        println!("Symbol report: {}", path.display());
    }
    if result.blocked {
        println!(
            "Strict mode: {} incorrect symbols found, dataset not written",
            result.summary.incorrect_count()
        );
    } else if result.dry_run {
        println!("Dry run: dataset not written");
    }
}

/// `U+0071` style code points, space separated.
fn code_points(symbol: &str) -> String {
    symbol
        .chars()
        .map(|ch| format!("U+{:04X}", u32::from(ch)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn report_cell(result: &RunResult, count: usize) -> Cell {
    if result.report_symbols {
        count_cell(Some(count), Color::Yellow)
    } else {
        count_cell(None, Color::Yellow)
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
