//! Flatten stages shared by the `flatten` command and its tests.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use workout_flatten::{flatten_sheet, merge_flattened};
use workout_ingest::{read_sheet, verify_inputs};
use workout_model::ParserConfig;

use crate::types::{FileSummary, FlattenRun};

/// Load, parse, and merge every input.
///
/// All paths are checked before the first one is read, so a typo in the
/// last argument fails the run without partial work.
pub fn flatten_inputs(inputs: &[PathBuf], config: &ParserConfig) -> Result<FlattenRun> {
    verify_inputs(inputs)?;

    let start = Instant::now();
    let mut run = FlattenRun::default();
    let mut batches = Vec::with_capacity(inputs.len());
    for path in inputs {
        let span = info_span!("file", path = %path.display());
        let _guard = span.enter();

        let sheet = read_sheet(path).with_context(|| format!("load {}", path.display()))?;
        let result = flatten_sheet(&sheet, config);
        run.files.push(FileSummary {
            source_file: sheet.source_name.clone(),
            path: path.clone(),
            rows_read: sheet.rows.len(),
            skipped_rows: sheet.skipped_rows,
            date_columns: sheet.date_columns.len(),
            cells_seen: result.cells_seen,
            empty_cells: result.empty_cells,
            flat_rows: result.rows.len(),
        });
        batches.push(result.rows);
    }
    run.rows = merge_flattened(batches);

    info!(
        file_count = run.files.len(),
        row_count = run.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "flatten run complete"
    );
    Ok(run)
}
