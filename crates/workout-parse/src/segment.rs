//! Rep blob splitting and segment grammar.
//!
//! After the weight, a cell holds a rep blob (`6+3+3`, `12R+9L*2`,
//! `(3) 8(2)+6`) optionally followed by free text. The blob is split on
//! `+` into segments; each segment is
//!
//! ```text
//! [(setting)] <reps> [(setting)] [suffix] [*multiplier]
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;
use workout_model::{ParserConfig, Side};

use crate::normalization::{normalize_tokens, parse_number};

/// Largest `*N` multiplier expanded into parts. Larger values are kept as
/// feeling text, like the pass cap on group expansion this bounds the work
/// one cell can cause.
pub const MAX_MULTIPLIER: u32 = 100;

static REP_BLOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\([^)]*\)\s*)?[0-9A-Za-z.()+* ]+?)(?:\s+|$)(.*)$")
        .expect("valid rep blob regex")
});
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\(([^)]+)\))?([0-9]+(?:\.[0-9]+)?)(?:\(([^)]+)\))?([A-Za-z]*)(?:\*([0-9]+))?$",
    )
    .expect("valid segment regex")
});

/// A cell's rest text split into its rep blob and trailing free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepBlob {
    pub blob: String,
    pub tail: String,
}

impl RepBlob {
    /// True when the blob can describe reps at all.
    pub fn has_digits(&self) -> bool {
        self.blob.chars().any(|ch| ch.is_ascii_digit())
    }
}

/// Split normalized rest text into the rep blob and its tail.
///
/// The blob is the shortest leading run of rep characters that ends at
/// whitespace or at the end of the text. A leading `(setting)` stays with
/// the blob even when a space follows it.
pub fn split_rep_blob(rest: &str) -> RepBlob {
    let rest = normalize_tokens(rest);
    match REP_BLOB.captures(&rest) {
        Some(caps) => RepBlob {
            blob: caps[1].trim().to_string(),
            tail: caps[2].trim().to_string(),
        },
        None => RepBlob {
            blob: rest,
            tail: String::new(),
        },
    }
}

/// One `+`-separated segment that matched the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Segment text as it appeared after side-prefix normalization.
    pub raw: String,
    pub reps: f64,
    pub side: Option<Side>,
    pub setting: Option<String>,
    pub note: Option<String>,
}

/// Segments of a blob plus every fragment destined for the cell feeling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentParse {
    /// Parsed segments, with multipliers already expanded.
    pub segments: Vec<Segment>,
    /// Unmatched segments and promoted suffixes, in order of appearance.
    pub feelings: Vec<String>,
    /// Segments with a `*0` or over-cap multiplier. These sets were written
    /// down but cannot be counted, so the cell gets no synthetic set either.
    pub rejected_multipliers: usize,
}

/// Parse a normalized blob into segments.
///
/// Setting precedence: segment-leading, then segment-trailing, then
/// `group_setting`. Suffix `R`/`L` sets the side; a suffix in the global
/// feeling vocabulary goes to `feelings`; any other suffix is the segment
/// note. Segments that do not fit the grammar go to `feelings` untouched.
pub fn parse_segments(
    blob: &str,
    group_setting: Option<&str>,
    config: &ParserConfig,
) -> SegmentParse {
    let mut parse = SegmentParse::default();
    for raw in blob.split('+') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let Some(caps) = SEGMENT.captures(raw) else {
            trace!(segment_len = raw.len(), "segment kept as feeling");
            parse.feelings.push(raw.to_string());
            continue;
        };
        let Some(reps) = parse_number(&caps[2]) else {
            parse.feelings.push(raw.to_string());
            continue;
        };
        let multiplier = match caps.get(5) {
            Some(mult) => match mult.as_str().parse::<u32>() {
                Ok(0) => {
                    parse.rejected_multipliers += 1;
                    continue;
                }
                Ok(value) if value <= MAX_MULTIPLIER => value,
                _ => {
                    parse.rejected_multipliers += 1;
                    parse.feelings.push(raw.to_string());
                    continue;
                }
            },
            None => 1,
        };

        let lead = non_blank(caps.get(1).map(|m| m.as_str()));
        let trail = non_blank(caps.get(3).map(|m| m.as_str()));
        let setting = lead
            .or(trail)
            .or_else(|| group_setting.map(ToString::to_string));

        let suffix = caps[4].to_uppercase();
        let side = Side::from_marker(&suffix);
        let mut note = None;
        if side.is_none() && !suffix.is_empty() {
            if config.is_global_feeling(&suffix) {
                parse.feelings.push(suffix);
            } else {
                note = Some(suffix);
            }
        }

        for _ in 0..multiplier {
            parse.segments.push(Segment {
                raw: raw.to_string(),
                reps,
                side,
                setting: setting.clone(),
                note: note.clone(),
            });
        }
    }
    parse
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
