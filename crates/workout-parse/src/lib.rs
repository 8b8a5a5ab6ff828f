//! Free-text workout cell parser.
//!
//! This crate turns one hand-typed spreadsheet cell into structured parts:
//!
//! - **normalization**: whitespace/operator normalization and number helpers
//! - **weight**: leading weight token and unit conversion
//! - **pairs**: per-side weight and reps (`L10kgs 13 R10kgs 15`)
//! - **group**: shared settings (`(8+6)(3)`, `(3) 6+3+3`)
//! - **side**: `R12` to `12R` canonicalization
//! - **segment**: rep blob splitting and the segment grammar
//! - **cell**: the ordered pipeline over all of the above

pub mod cell;
pub mod group;
pub mod normalization;
pub mod pairs;
pub mod segment;
pub mod side;
pub mod weight;

pub use cell::{join_feelings, parse_cell};
pub use group::{expand_group_settings, split_leading_setting};
pub use normalization::{format_reps, normalize_tokens, parse_number};
pub use pairs::{SideWeightPairs, parse_side_weight_pairs};
pub use segment::{
    MAX_MULTIPLIER, RepBlob, Segment, SegmentParse, parse_segments, split_rep_blob,
};
pub use side::normalize_side_prefixes;
pub use weight::{Weight, WeightScan, extract_weight};
