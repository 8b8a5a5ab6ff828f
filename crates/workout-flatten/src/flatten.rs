//! Sheet flattening.

use std::time::Instant;

use tracing::{debug, info, info_span, trace};
use workout_ingest::Sheet;
use workout_model::{FlatRow, ParserConfig, RawCell, redact_value};
use workout_parse::parse_cell;

use crate::sequence::{assign_set_numbers, sort_rows};

/// Flattened rows of one sheet plus the counters shown in the run summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenResult {
    /// Ordered and numbered rows.
    pub rows: Vec<FlatRow>,
    /// Non-blank date cells that were parsed.
    pub cells_seen: usize,
    /// Non-blank cells that produced no parts.
    pub empty_cells: usize,
}

/// Flatten every non-blank date cell of `sheet`.
///
/// Rows come back sorted by (exercise, date, set_row, part_idx) with
/// `set_number` assigned per (date, exercise).
pub fn flatten_sheet(sheet: &Sheet, config: &ParserConfig) -> FlattenResult {
    let span = info_span!("flatten", source_file = %sheet.source_name);
    let _guard = span.enter();
    let start = Instant::now();

    if sheet.date_columns.is_empty() {
        debug!("sheet has no date columns");
    }

    let mut result = FlattenResult::default();
    for row in &sheet.rows {
        for column in &sheet.date_columns {
            let text = row.cell(column);
            if text.trim().is_empty() {
                continue;
            }
            result.cells_seen += 1;
            let cell = RawCell {
                text,
                exercise: &row.exercise,
                date: column.date,
                set_row: row.set_row,
                source_file: &sheet.source_name,
            };
            let parts = parse_cell(text, config);
            trace!(
                exercise = %row.exercise,
                date = %column.date,
                set_row = row.set_row,
                cell = %redact_value(text),
                part_count = parts.len(),
                "cell parsed"
            );
            if parts.is_empty() {
                result.empty_cells += 1;
                continue;
            }
            result.rows.extend(
                parts
                    .into_iter()
                    .enumerate()
                    .map(|(idx, part)| FlatRow::from_part(part, &cell, idx + 1)),
            );
        }
    }

    sort_rows(&mut result.rows);
    assign_set_numbers(&mut result.rows);

    info!(
        cells_seen = result.cells_seen,
        empty_cells = result.empty_cells,
        row_count = result.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "flatten complete"
    );
    result
}
