//! Date column detection.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DATE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").expect("valid date header regex"));

/// Format of date column headers.
pub const DATE_HEADER_FORMAT: &str = "%Y.%m.%d";

/// True when `header` has the `YYYY.MM.DD` shape.
pub fn looks_like_date_header(header: &str) -> bool {
    DATE_HEADER.is_match(header)
}

/// Parse a `YYYY.MM.DD` header; `None` for any other header or an impossible date.
pub fn parse_date_header(header: &str) -> Option<NaiveDate> {
    if !looks_like_date_header(header) {
        return None;
    }
    NaiveDate::parse_from_str(header, DATE_HEADER_FORMAT).ok()
}
