use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use workout_model::{ParsedPart, Side};
use workout_parse::format_reps;

use crate::commands::FlattenOutcome;

pub fn print_summary(outcome: &FlattenOutcome) {
    let run = &outcome.run;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source file"),
        header_cell("Rows read"),
        header_cell("Skipped rows"),
        header_cell("Date columns"),
        header_cell("Cells parsed"),
        header_cell("Cells without parts"),
        header_cell("Flat rows"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for file in &run.files {
        table.add_row(vec![
            Cell::new(&file.source_file)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file.rows_read),
            count_cell(file.skipped_rows, Color::Yellow, false),
            count_cell(file.date_columns, Color::Yellow, true),
            Cell::new(file.cells_seen),
            count_cell(file.empty_cells, Color::Yellow, false),
            Cell::new(file.flat_rows),
        ]);
    }
    if run.files.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(run.total_rows_read()).add_attribute(Attribute::Bold),
            count_cell(run.total_skipped_rows(), Color::Yellow, false)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(run.total_cells_seen()).add_attribute(Attribute::Bold),
            count_cell(run.total_empty_cells(), Color::Yellow, false)
                .add_attribute(Attribute::Bold),
            Cell::new(run.rows.len()).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
    match &outcome.outputs {
        Some(paths) => {
            println!("Full: {}", paths.full.display());
            println!("Clean: {}", paths.clean.display());
        }
        None => println!("Dry run: no files written"),
    }
}

pub fn print_parts(text: &str, parts: &[ParsedPart]) {
    println!("Cell: {text:?}");
    if parts.is_empty() {
        println!("No parts");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Weight (lb)"),
        header_cell("Reps"),
        header_cell("Side"),
        header_cell("Setting"),
        header_cell("Note"),
        header_cell("Feeling"),
        header_cell("Raw reps"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (index, part) in parts.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            optional_cell(part.weight_lbs.map(|weight| format!("{weight:.2}"))),
            Cell::new(format_reps(part.reps)),
            optional_cell(part.side.map(Side::as_str)),
            optional_cell(part.setting.as_deref()),
            optional_cell(part.segment_note.as_deref()),
            optional_cell(part.feeling.as_deref()),
            optional_cell(part.reps_raw_part.as_deref()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Highlight suspicious counts: zero when `zero_is_bad`, non-zero otherwise.
fn count_cell(count: usize, color: Color, zero_is_bad: bool) -> Cell {
    if (count == 0) == zero_is_bad {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value.to_string()),
        None => dim_cell("-"),
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
