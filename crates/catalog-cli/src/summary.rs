//! Human-readable run summaries rendered with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_load::TableLoadResult;
use catalog_model::CatalogTables;

use catalog_cli::types::{LoadOutcome, RunOutcome};

pub fn print_run_summary(outcome: &RunOutcome) {
    println!("Records: {}", outcome.record_count);
    print_transform_summary(&outcome.tables);
    match &outcome.load {
        LoadOutcome::Skipped => println!("Load: skipped (dry run)"),
        LoadOutcome::ConnectionFailed(reason) => {
            eprintln!("Load failed before any insert: {reason}");
        }
        LoadOutcome::Completed(results) => print_load_summary(results),
    }
}

fn print_transform_summary(tables: &CatalogTables) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, rows) in table_counts(tables) {
        table.add_row(vec![Cell::new(name), Cell::new(rows)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(tables.total_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_load_summary(results: &[TableLoadResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Loaded"),
        header_cell("Error"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.table),
            Cell::new(result.rows_attempted),
            status_cell(result),
            match &result.error {
                Some(reason) => Cell::new(reason).fg(Color::Red),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
    let failed = results.iter().filter(|r| !r.succeeded()).count();
    if failed > 0 {
        eprintln!("{failed} table(s) failed to load; see log for details");
    }
}

fn table_counts(tables: &CatalogTables) -> [(&'static str, usize); 7] {
    [
        ("titles", tables.titles.len()),
        ("directors", tables.directors.len()),
        ("casts", tables.casts.len()),
        ("genres", tables.genres.len()),
        ("title_director", tables.title_director.len()),
        ("title_cast", tables.title_cast.len()),
        ("title_genre", tables.title_genre.len()),
    ]
}

fn status_cell(result: &TableLoadResult) -> Cell {
    if result.succeeded() {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
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
