//! Data model shared by the workout flattening crates.

pub mod enums;
pub mod error;
pub mod options;
pub mod part;
pub mod redact;
pub mod row;

pub use enums::{Side, WeightUnit};
pub use error::WorkoutError;
pub use options::{
    DEFAULT_FEELING_SEPARATOR, DEFAULT_GLOBAL_FEELINGS, DEFAULT_REPS, ParserConfig,
};
pub use part::{KG_TO_LB, ParsedPart, RawCell, to_pounds};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
pub use row::FlatRow;
