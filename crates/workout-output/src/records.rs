//! Serialized row shapes.

use serde::Serialize;
use workout_model::{FlatRow, Side};

/// Format a float so it always carries a decimal point (`135.0`, `4.5`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Weight rounded to two decimals for display; the stored value is untouched.
pub fn format_weight(value: f64) -> String {
    format_float((value * 100.0).round() / 100.0)
}

/// A row of the full view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullRecord<'a> {
    pub date: String,
    pub exercise: &'a str,
    pub set_number: usize,
    pub weight_lbs: Option<String>,
    pub reps: String,
    pub side: Option<&'static str>,
    pub setting: Option<&'a str>,
    pub segment_note: Option<&'a str>,
    pub feeling: Option<&'a str>,
    pub reps_raw_part: Option<&'a str>,
    pub raw_cell: &'a str,
    pub weight_unit_raw: &'a str,
    #[serde(rename = "_set_row")]
    pub set_row: usize,
    #[serde(rename = "_part_idx")]
    pub part_idx: usize,
    pub source_file: &'a str,
}

/// A row of the clean view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord<'a> {
    pub date: String,
    pub exercise: &'a str,
    pub set_number: usize,
    pub weight_lbs: Option<String>,
    pub reps: String,
    pub side: Option<&'static str>,
    pub setting: Option<&'a str>,
    pub segment_note: Option<&'a str>,
    pub feeling: Option<&'a str>,
    pub reps_raw_part: Option<&'a str>,
    pub raw_cell: &'a str,
    pub source_file: &'a str,
}

impl<'a> From<&'a FlatRow> for FullRecord<'a> {
    fn from(row: &'a FlatRow) -> Self {
        Self {
            date: row.date.format("%Y-%m-%d").to_string(),
            exercise: &row.exercise,
            set_number: row.set_number,
            weight_lbs: row.weight_lbs.map(format_weight),
            reps: format_float(row.reps),
            side: row.side.map(Side::as_str),
            setting: row.setting.as_deref(),
            segment_note: row.segment_note.as_deref(),
            feeling: row.feeling.as_deref(),
            reps_raw_part: row.reps_raw_part.as_deref(),
            raw_cell: &row.raw_cell,
            weight_unit_raw: &row.weight_unit_raw,
            set_row: row.set_row,
            part_idx: row.part_idx,
            source_file: &row.source_file,
        }
    }
}

impl<'a> From<&'a FlatRow> for CleanRecord<'a> {
    fn from(row: &'a FlatRow) -> Self {
        let FullRecord {
            date,
            exercise,
            set_number,
            weight_lbs,
            reps,
            side,
            setting,
            segment_note,
            feeling,
            reps_raw_part,
            raw_cell,
            source_file,
            ..
        } = FullRecord::from(row);
        Self {
            date,
            exercise,
            set_number,
            weight_lbs,
            reps,
            side,
            setting,
            segment_note,
            feeling,
            reps_raw_part,
            raw_cell,
            source_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(format_float(135.0), "135.0");
        assert_eq!(format_float(4.5), "4.5");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn weight_rounds_to_two_places() {
        assert_eq!(format_weight(22.046_226_218), "22.05");
        assert_eq!(format_weight(99.999), "100.0");
        assert_eq!(format_weight(50.0), "50.0");
    }
}
