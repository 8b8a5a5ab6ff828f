//! Numeric helpers for rep and weight tokens.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_number(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Formats a rep count the way it is written in a sheet: `13`, `7.5`.
pub fn format_reps(reps: f64) -> String {
    if reps.fract() == 0.0 && reps.abs() < 1e15 {
        format!("{}", reps as i64)
    } else {
        format!("{reps}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_reps_drop_decimals() {
        assert_eq!(format_reps(13.0), "13");
        assert_eq!(format_reps(7.5), "7.5");
    }

    #[test]
    fn parse_number_rejects_blank() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("x"), None);
    }
}
