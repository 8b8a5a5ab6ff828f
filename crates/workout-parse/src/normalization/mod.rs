//! Text normalization applied before any grammar stage.
//!
//! - **tokens**: whitespace and operator spacing
//! - **numeric**: number parsing and rep-count formatting

pub mod numeric;
pub mod tokens;

pub use numeric::{format_reps, parse_number};
pub use tokens::normalize_tokens;
