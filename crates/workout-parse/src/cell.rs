//! Cell parser: the ordered stage pipeline.
//!
//! 1. weight extraction ([`extract_weight`])
//! 2. side/weight pair fast path ([`parse_side_weight_pairs`]), on the whole
//!    cell when the pairs cover every number, else on the text after the weight
//! 3. rep blob split ([`split_rep_blob`])
//! 4. trailing group-setting expansion ([`expand_group_settings`])
//! 5. leading group setting ([`split_leading_setting`]); a setting with no
//!    reps after it keeps the setting and leaves the words as the feeling
//! 6. side-prefix normalization ([`normalize_side_prefixes`])
//! 7. segment parsing ([`parse_segments`])
//! 8. no-reps fallback (skipped when a `*N` multiplier was rejected), then
//!    empty fallback
//!
//! The parser is total: malformed text never fails, it ends up in the
//! cell feeling or is dropped.

use tracing::trace;
use workout_model::{ParsedPart, ParserConfig};

use crate::group::{expand_group_settings, split_leading_setting};
use crate::normalization::normalize_tokens;
use crate::pairs::parse_side_weight_pairs;
use crate::segment::{parse_segments, split_rep_blob};
use crate::side::normalize_side_prefixes;
use crate::weight::extract_weight;

/// Parse one cell into zero or more parts.
///
/// # Examples
///
/// ```
/// use workout_model::{ParserConfig, Side};
/// use workout_parse::parse_cell;
///
/// let parts = parse_cell("135lb R12+L9", &ParserConfig::default());
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].side, Some(Side::Right));
/// assert_eq!(parts[1].reps, 9.0);
/// ```
pub fn parse_cell(cell: &str, config: &ParserConfig) -> Vec<ParsedPart> {
    if cell.trim().is_empty() {
        return Vec::new();
    }

    let scan = extract_weight(cell);
    let rest = normalize_tokens(&scan.rest);

    // Whole cell first so `L10kgs 13 R10kgs 15` keeps both sides; numbers
    // left over mean the pairs are only part of the story.
    let whole = parse_side_weight_pairs(cell);
    if whole.is_complete() {
        trace!(part_count = whole.parts.len(), "side/weight pairs");
        return whole.parts;
    }
    let after_weight = parse_side_weight_pairs(&rest);
    if !after_weight.parts.is_empty() {
        trace!(part_count = after_weight.parts.len(), "side/weight pairs after weight");
        return after_weight.parts;
    }

    let split = split_rep_blob(&rest);
    let mut feelings = Vec::new();
    let mut segments = Vec::new();
    let mut fallback_setting = None;
    let mut rejected_multipliers = 0;
    if split.has_digits() {
        let expanded = expand_group_settings(&split.blob);
        let (group_setting, blob) = split_leading_setting(&expanded);
        if blob.chars().any(|ch| ch.is_ascii_digit()) {
            feelings.push(split.tail);
            let blob = normalize_side_prefixes(&blob);
            let parsed = parse_segments(&blob, group_setting.as_deref(), config);
            segments = parsed.segments;
            feelings.extend(parsed.feelings);
            rejected_multipliers = parsed.rejected_multipliers;
        } else {
            // Only the setting had digits: keep the words in written order.
            let (_, words) = split_leading_setting(&rest);
            feelings.push(words);
            fallback_setting = group_setting;
        }
    } else {
        // No rep count anywhere: the whole rest is free text.
        feelings.push(rest);
    }

    let feeling = join_feelings(&feelings, &config.feeling_separator);
    let (weight_lbs, weight_unit_raw) = match scan.weight {
        Some(weight) => (Some(weight.pounds), weight.unit_raw),
        None => (None, String::new()),
    };

    if segments.is_empty() {
        if weight_lbs.is_none() {
            trace!("cell has no weight and no reps");
            return Vec::new();
        }
        if rejected_multipliers > 0 {
            trace!(rejected_multipliers, "multiplier out of range; no default set");
            return Vec::new();
        }
        return vec![ParsedPart {
            weight_lbs,
            setting: fallback_setting,
            feeling,
            weight_unit_raw,
            ..ParsedPart::with_reps(config.default_reps)
        }];
    }

    trace!(part_count = segments.len(), "parsed segments");
    segments
        .into_iter()
        .map(|segment| ParsedPart {
            weight_lbs,
            reps: segment.reps,
            side: segment.side,
            setting: segment.setting,
            segment_note: segment.note,
            feeling: feeling.clone(),
            reps_raw_part: Some(segment.raw),
            weight_unit_raw: weight_unit_raw.clone(),
        })
        .collect()
}

/// Join non-blank fragments with `separator`; `None` when nothing remains.
pub fn join_feelings(fragments: &[String], separator: &str) -> Option<String> {
    let kept: Vec<&str> = fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(separator))
    }
}
