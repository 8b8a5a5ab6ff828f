//! Side-prefix canonicalization.

use std::sync::LazyLock;

use regex::Regex;

static SIDE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([RLrl])\s*([0-9]+(?:\.[0-9]+)?)([A-Za-z]*)(?:\*([0-9]+))?$")
        .expect("valid side prefix regex")
});

/// Rewrite `R12` as `12R` and `L9HA*2` as `9LHA*2`.
///
/// Segments are split on `+`; blank segments are dropped. Segments that do
/// not start with a side marker are kept as written.
pub fn normalize_side_prefixes(blob: &str) -> String {
    blob.split('+')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(canonical_token)
        .collect::<Vec<_>>()
        .join("+")
}

fn canonical_token(token: &str) -> String {
    let Some(caps) = SIDE_PREFIX.captures(token) else {
        return token.to_string();
    };
    let side = caps[1].to_uppercase();
    let number = &caps[2];
    let suffix = caps[3].to_uppercase();
    match caps.get(4) {
        Some(mult) => format!("{number}{side}{suffix}*{}", mult.as_str()),
        None => format!("{number}{side}{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_side_after_number() {
        assert_eq!(normalize_side_prefixes("R12+L9"), "12R+9L");
        assert_eq!(normalize_side_prefixes("l9ha*2"), "9LHA*2");
    }

    #[test]
    fn trailing_form_is_untouched() {
        assert_eq!(normalize_side_prefixes("12R+9L"), "12R+9L");
        assert_eq!(normalize_side_prefixes("8(3)+6"), "8(3)+6");
    }

    #[test]
    fn drops_blank_segments() {
        assert_eq!(normalize_side_prefixes("R12++L9+"), "12R+9L");
    }
}
