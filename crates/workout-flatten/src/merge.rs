//! Multi-file merge.

use tracing::debug;
use workout_model::FlatRow;

/// Concatenate per-file results in input order, then stable-sort by
/// (date, exercise, set_number, source_file).
///
/// `set_number` is kept from the per-file pass, so two files logging the
/// same (date, exercise) interleave their sets instead of renumbering.
pub fn merge_flattened(batches: Vec<Vec<FlatRow>>) -> Vec<FlatRow> {
    let batch_count = batches.len();
    let mut rows: Vec<FlatRow> = batches.into_iter().flatten().collect();
    rows.sort_by(|left, right| {
        left.date
            .cmp(&right.date)
            .then_with(|| left.exercise.cmp(&right.exercise))
            .then(left.set_number.cmp(&right.set_number))
            .then_with(|| left.source_file.cmp(&right.source_file))
    });
    debug!(batch_count, row_count = rows.len(), "merged flattened rows");
    rows
}
