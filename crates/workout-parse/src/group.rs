//! Group settings: one parenthesized setting shared by several segments.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TRAILING_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\((\s*[0-9]+(?:\.[0-9]+)?(?:\s*\+\s*[0-9]+(?:\.[0-9]+)?)+\s*)\)\(([^)]+)\)",
    )
    .expect("valid trailing group regex")
});
static LEADING_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([^)]+)\)\s*(.+)$").expect("valid leading group regex"));

/// Distribute trailing group settings over their members.
///
/// `(8+6+4)(3)` becomes `8(3)+6(3)+4(3)`. Rewriting repeats until nothing
/// changes, capped at one pass per `+`-separated segment plus one.
///
/// # Examples
///
/// ```
/// use workout_parse::expand_group_settings;
///
/// assert_eq!(expand_group_settings("(8+6)(pin 4)"), "8(pin 4)+6(pin 4)");
/// ```
pub fn expand_group_settings(blob: &str) -> String {
    let mut current = blob.trim().to_string();
    let max_passes = current.split('+').count() + 1;
    for _ in 0..max_passes {
        let next = TRAILING_GROUP
            .replace_all(&current, |caps: &Captures<'_>| {
                let members: String = caps[1].chars().filter(|ch| !ch.is_whitespace()).collect();
                let setting = caps[2].trim();
                members
                    .split('+')
                    .map(|member| format!("{member}({setting})"))
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Split a leading `(setting)` off a rep blob.
///
/// Returns the group setting (if any, and non-blank) and the remaining blob.
/// A blob that is only a parenthesized group has no remainder and is
/// returned unchanged.
pub fn split_leading_setting(blob: &str) -> (Option<String>, String) {
    match LEADING_GROUP.captures(blob) {
        Some(caps) => {
            let setting = Some(caps[1].trim().to_string()).filter(|value| !value.is_empty());
            (setting, caps[2].trim().to_string())
        }
        None => (None, blob.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_trailing_group() {
        assert_eq!(expand_group_settings("(8+6+4)(3)"), "8(3)+6(3)+4(3)");
    }

    #[test]
    fn expands_several_groups() {
        assert_eq!(
            expand_group_settings("(10+8)(2)+(6 + 6)(3)"),
            "10(2)+8(2)+6(3)+6(3)"
        );
    }

    #[test]
    fn single_member_is_not_a_group() {
        assert_eq!(expand_group_settings("(8)(3)"), "(8)(3)");
    }

    #[test]
    fn leading_setting_is_split_off() {
        assert_eq!(
            split_leading_setting("(3) 6+3+3"),
            (Some("3".to_string()), "6+3+3".to_string())
        );
        assert_eq!(
            split_leading_setting("(seat 4)12+10"),
            (Some("seat 4".to_string()), "12+10".to_string())
        );
    }

    #[test]
    fn bare_group_has_no_remainder() {
        assert_eq!(split_leading_setting("(3)"), (None, "(3)".to_string()));
        assert_eq!(split_leading_setting("12+10"), (None, "12+10".to_string()));
    }
}
