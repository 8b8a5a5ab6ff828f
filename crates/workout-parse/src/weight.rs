//! Weight token extraction.
//!
//! A weight is the first `<number><unit>` token in a cell. Units are
//! matched case-insensitively: `lb`, `lbs`, `l`, `ls`, `po` mean pounds;
//! `kg`, `kgs`, `k`, `ks` mean kilograms.

use std::sync::LazyLock;

use regex::Regex;
use workout_model::{WeightUnit, to_pounds};

use crate::normalization::parse_number;

static WEIGHT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(lb?s?|po|kg?s?)\b").expect("valid weight regex")
});

/// A weight found in a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Weight {
    /// Value converted to pounds.
    pub pounds: f64,
    /// Unit as written, lower-cased.
    pub unit_raw: String,
}

/// Result of scanning a cell for its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightScan {
    pub weight: Option<Weight>,
    /// Text after the weight token, trimmed. The whole cell when no weight was found.
    pub rest: String,
}

/// Find the first weight token in `cell`.
///
/// Text before the token is discarded; text after it is returned as `rest`.
pub fn extract_weight(cell: &str) -> WeightScan {
    if cell.trim().is_empty() {
        return WeightScan {
            weight: None,
            rest: String::new(),
        };
    }
    let Some(caps) = WEIGHT_TOKEN.captures(cell) else {
        return WeightScan {
            weight: None,
            rest: cell.to_string(),
        };
    };
    let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return WeightScan {
            weight: None,
            rest: cell.to_string(),
        };
    };
    let Some(value) = parse_number(number.as_str()) else {
        return WeightScan {
            weight: None,
            rest: cell.to_string(),
        };
    };
    let unit_raw = unit.as_str().to_lowercase();
    WeightScan {
        weight: Some(Weight {
            pounds: to_pounds(value, WeightUnit::from_raw(&unit_raw)),
            unit_raw,
        }),
        rest: cell[whole.end()..].trim().to_string(),
    }
}
