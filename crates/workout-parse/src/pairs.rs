//! Side/weight pair fast path.
//!
//! Cells such as `L10kgs 13 R10kgs 15` give every side its own weight and
//! rep count. When at least one pair is present the cell is fully described
//! by its pairs; whatever text remains is the shared feeling.

use std::sync::LazyLock;

use regex::Regex;
use workout_model::{ParsedPart, Side, WeightUnit, to_pounds};

use crate::normalization::{format_reps, normalize_tokens, parse_number};

static SIDE_WEIGHT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([RLrl])\s*([0-9]+(?:\.[0-9]+)?)\s*(lb?s?|po|kg?s?)\s*([0-9]+(?:\.[0-9]+)?)\b",
    )
    .expect("valid side/weight pair regex")
});

/// Parts found by the pair grammar plus the leftover text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SideWeightPairs {
    pub parts: Vec<ParsedPart>,
    /// Leftover text with every pair removed, or `None` when nothing remains.
    pub leftover: Option<String>,
}

impl SideWeightPairs {
    /// True when pairs were found and the leftover holds no further numbers,
    /// i.e. the pairs account for every set in the text.
    pub fn is_complete(&self) -> bool {
        !self.parts.is_empty()
            && !self
                .leftover
                .as_deref()
                .is_some_and(|text| text.chars().any(|ch| ch.is_ascii_digit()))
    }
}

/// Find every `<side><weight><unit> <reps>` pair in `text`.
///
/// Each pair becomes one part. The leftover text is attached to every part
/// as its feeling.
pub fn parse_side_weight_pairs(text: &str) -> SideWeightPairs {
    let normalized = normalize_tokens(text);
    let mut parts = Vec::new();
    let mut used = Vec::new();
    for caps in SIDE_WEIGHT_PAIR.captures_iter(&normalized) {
        let (Some(whole), Some(side), Some(value), Some(unit), Some(reps)) = (
            caps.get(0),
            caps.get(1),
            caps.get(2),
            caps.get(3),
            caps.get(4),
        ) else {
            continue;
        };
        let (Some(side), Some(value), Some(reps)) = (
            Side::from_marker(side.as_str()),
            parse_number(value.as_str()),
            parse_number(reps.as_str()),
        ) else {
            continue;
        };
        let unit_raw = unit.as_str().to_lowercase();
        parts.push(ParsedPart {
            weight_lbs: Some(to_pounds(value, WeightUnit::from_raw(&unit_raw))),
            side: Some(side),
            reps_raw_part: Some(format!("{}{side}", format_reps(reps))),
            weight_unit_raw: unit_raw,
            ..ParsedPart::with_reps(reps)
        });
        used.push(whole.range());
    }

    let mut leftover = normalized;
    for range in used.into_iter().rev() {
        leftover.replace_range(range, "");
    }
    let leftover = Some(leftover.trim().to_string()).filter(|text| !text.is_empty());
    if leftover.is_some() {
        for part in &mut parts {
            part.feeling.clone_from(&leftover);
        }
    }
    SideWeightPairs { parts, leftover }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_side_keeps_its_own_weight() {
        let pairs = parse_side_weight_pairs("L10kgs 13 R12kgs 15");
        assert_eq!(pairs.parts.len(), 2);
        assert_eq!(pairs.parts[0].side, Some(Side::Left));
        assert_eq!(pairs.parts[0].reps, 13.0);
        assert_eq!(pairs.parts[0].reps_raw_part.as_deref(), Some("13L"));
        assert_eq!(pairs.parts[1].side, Some(Side::Right));
        assert!((pairs.parts[1].weight_lbs.unwrap() - 12.0 * 2.204_622_621_8).abs() < 1e-9);
        assert_eq!(pairs.parts[1].weight_unit_raw, "kgs");
        assert!(pairs.leftover.is_none());
    }

    #[test]
    fn leftover_becomes_feeling() {
        let pairs = parse_side_weight_pairs("r20lb 10 shaky");
        assert_eq!(pairs.parts.len(), 1);
        assert_eq!(pairs.parts[0].side, Some(Side::Right));
        assert_eq!(pairs.leftover.as_deref(), Some("shaky"));
        assert_eq!(pairs.parts[0].feeling.as_deref(), Some("shaky"));
    }

    #[test]
    fn numeric_leftover_is_incomplete() {
        assert!(parse_side_weight_pairs("L10kgs 13 R10kgs 15").is_complete());
        assert!(parse_side_weight_pairs("r20lb 10 shaky").is_complete());
        assert!(!parse_side_weight_pairs("R20lb 10+8").is_complete());
        assert!(!parse_side_weight_pairs("20kg L10kgs 13").is_complete());
        assert!(!parse_side_weight_pairs("R12+L9").is_complete());
    }

    #[test]
    fn plain_reps_are_not_pairs() {
        let pairs = parse_side_weight_pairs("R12+L9");
        assert!(pairs.parts.is_empty());
        assert_eq!(pairs.leftover.as_deref(), Some("R12+L9"));
    }

    #[test]
    fn fractional_reps_keep_decimals() {
        let pairs = parse_side_weight_pairs("L5kg 7.5");
        assert_eq!(pairs.parts[0].reps_raw_part.as_deref(), Some("7.5L"));
    }
}
