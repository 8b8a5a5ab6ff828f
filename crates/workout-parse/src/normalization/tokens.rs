//! Whitespace and operator normalization.

use std::sync::LazyLock;

use regex::Regex;

static PLUS_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\+\s*").expect("valid plus spacing regex"));
static STAR_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\*\s*").expect("valid star spacing regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Trim, drop spacing around `+` and `*`, and collapse whitespace runs.
///
/// Idempotent: normalizing an already normalized string returns it unchanged.
///
/// # Examples
///
/// ```
/// use workout_parse::normalize_tokens;
///
/// assert_eq!(normalize_tokens("  12 + 10 *2   felt  ok "), "12+10*2 felt ok");
/// ```
pub fn normalize_tokens(text: &str) -> String {
    let plus = PLUS_SPACING.replace_all(text.trim(), "+");
    let star = STAR_SPACING.replace_all(&plus, "*");
    WHITESPACE_RUN.replace_all(&star, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_operator_spacing() {
        assert_eq!(normalize_tokens("6 + 3 +3"), "6+3+3");
        assert_eq!(normalize_tokens("8 * 3"), "8*3");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_tokens("12\t\tfelt   strong"), "12 felt strong");
    }

    #[test]
    fn blank_input_stays_blank() {
        assert_eq!(normalize_tokens(""), "");
        assert_eq!(normalize_tokens("   \n "), "");
    }
}
