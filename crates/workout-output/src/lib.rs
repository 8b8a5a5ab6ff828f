//! CSV output for flattened workout rows.
//!
//! Two views are written side by side:
//!
//! - **full**: every column, including the audit fields `weight_unit_raw`,
//!   `_set_row` and `_part_idx`
//! - **clean**: the same rows without the audit fields

mod error;
mod paths;
mod records;
mod writer;

pub use error::{OutputError, Result};
pub use paths::OutputPaths;
pub use records::{CleanRecord, FullRecord, format_float, format_weight};
pub use writer::{render_clean, render_full, write_views};
