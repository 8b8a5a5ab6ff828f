//! Row ordering and set numbering.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use workout_model::FlatRow;

/// Stable sort by (exercise, date, set_row, part_idx).
///
/// Only positional keys take part, so parsed values never reorder sets.
pub fn sort_rows(rows: &mut [FlatRow]) {
    rows.sort_by(|left, right| {
        left.exercise
            .cmp(&right.exercise)
            .then(left.date.cmp(&right.date))
            .then(left.set_row.cmp(&right.set_row))
            .then(left.part_idx.cmp(&right.part_idx))
    });
}

/// Number rows 1.. within each (date, exercise) group, in current order.
pub fn assign_set_numbers(rows: &mut [FlatRow]) {
    let mut counters: BTreeMap<(NaiveDate, String), usize> = BTreeMap::new();
    for row in rows.iter_mut() {
        let entry = counters
            .entry((row.date, row.exercise.clone()))
            .or_insert(0);
        *entry += 1;
        row.set_number = *entry;
    }
}
