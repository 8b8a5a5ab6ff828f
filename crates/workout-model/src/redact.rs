//! Process-wide switch for logging raw cell text.
//!
//! Cell text is personal training data; it only reaches the logs when the
//! front end turns this on (`--log-data`).

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when raw values may not be logged.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Allow or forbid raw values in log events.
pub fn set_log_data_enabled(enable: bool) {
    LOG_DATA_ENABLED.store(enable, Ordering::Release);
}

/// Returns true if raw values may be logged.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns `value` when data logging is enabled, otherwise [`REDACTED_VALUE`].
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_follows_switch() {
        set_log_data_enabled(false);
        assert_eq!(redact_value("135lb R12"), REDACTED_VALUE);
        set_log_data_enabled(true);
        assert_eq!(redact_value("135lb R12"), "135lb R12");
        set_log_data_enabled(false);
    }
}
