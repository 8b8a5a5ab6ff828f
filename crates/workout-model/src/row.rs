#![deny(unsafe_code)]

use chrono::NaiveDate;

use crate::enums::Side;
use crate::part::{ParsedPart, RawCell};

/// One parsed part placed in the long-form table.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub date: NaiveDate,
    pub exercise: String,
    /// 1-based counter per (date, exercise), assigned after sorting.
    pub set_number: usize,
    pub weight_lbs: Option<f64>,
    pub reps: f64,
    pub side: Option<Side>,
    pub setting: Option<String>,
    pub segment_note: Option<String>,
    pub feeling: Option<String>,
    pub reps_raw_part: Option<String>,
    pub raw_cell: String,
    pub weight_unit_raw: String,
    /// Position within the contiguous exercise block of the source sheet.
    pub set_row: usize,
    /// Position among the parts of the same cell.
    pub part_idx: usize,
    pub source_file: String,
}

impl FlatRow {
    /// Materialize `part` for the given cell. `set_number` starts at 0 until numbered.
    pub fn from_part(part: ParsedPart, cell: &RawCell<'_>, part_idx: usize) -> Self {
        let ParsedPart {
            weight_lbs,
            reps,
            side,
            setting,
            segment_note,
            feeling,
            reps_raw_part,
            weight_unit_raw,
        } = part;
        Self {
            date: cell.date,
            exercise: cell.exercise.to_string(),
            set_number: 0,
            weight_lbs,
            reps,
            side,
            setting,
            segment_note,
            feeling,
            reps_raw_part,
            raw_cell: cell.text.to_string(),
            weight_unit_raw,
            set_row: cell.set_row,
            part_idx,
            source_file: cell.source_file.to_string(),
        }
    }
}
