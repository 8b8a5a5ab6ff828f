//! Parsed cell parts.

use serde::{Deserialize, Serialize};

use crate::enums::{Side, WeightUnit};

/// Pounds per kilogram.
pub const KG_TO_LB: f64 = 2.204_622_621_8;

/// Convert a weight written in `unit` to pounds.
pub fn to_pounds(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => value * KG_TO_LB,
        WeightUnit::Pounds => value,
    }
}

/// One structured result of parsing a workout cell.
///
/// A cell yields zero or more parts; `"R12+L9"` yields two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPart {
    /// Weight in pounds, whatever unit it was written in.
    pub weight_lbs: Option<f64>,
    pub reps: f64,
    pub side: Option<Side>,
    /// Machine setting captured in parentheses.
    pub setting: Option<String>,
    pub segment_note: Option<String>,
    /// Cell-scoped free text, shared by every part of the cell.
    pub feeling: Option<String>,
    /// Token the part came from; `None` when the reps were inferred.
    pub reps_raw_part: Option<String>,
    /// Unit as written, lower-cased. Empty when the cell had no weight.
    pub weight_unit_raw: String,
}

impl ParsedPart {
    /// A part with the given reps and everything else unset.
    pub fn with_reps(reps: f64) -> Self {
        Self {
            weight_lbs: None,
            reps,
            side: None,
            setting: None,
            segment_note: None,
            feeling: None,
            reps_raw_part: None,
            weight_unit_raw: String::new(),
        }
    }
}

/// A single spreadsheet cell together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell<'a> {
    pub text: &'a str,
    pub exercise: &'a str,
    pub date: chrono::NaiveDate,
    /// 1-based position inside the contiguous exercise block.
    pub set_row: usize,
    pub source_file: &'a str,
}
