//! Wide-to-long flattening of workout sheets.
//!
//! Every non-blank date cell of a [`Sheet`](workout_ingest::Sheet) is parsed
//! into parts; each part becomes one [`FlatRow`](workout_model::FlatRow).
//! Rows are then ordered and numbered per (date, exercise).

pub mod flatten;
pub mod merge;
pub mod sequence;

pub use flatten::{FlattenResult, flatten_sheet};
pub use merge::merge_flattened;
pub use sequence::{assign_set_numbers, sort_rows};
