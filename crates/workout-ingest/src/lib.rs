//! Workout sheet ingestion.
//!
//! Loads wide CSV exports, fills the sparse exercise column, numbers rows
//! within each exercise block, and finds the date columns.

pub mod dates;
pub mod discovery;
pub mod error;
pub mod sheet;

pub use dates::{DATE_HEADER_FORMAT, looks_like_date_header, parse_date_header};
pub use discovery::{source_name, verify_inputs};
pub use error::{IngestError, Result};
pub use sheet::{
    DateColumn, Sheet, SheetRow, block_positions, detect_date_columns, forward_fill, read_sheet,
    read_sheet_from_reader,
};
