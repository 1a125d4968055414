// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

/// Rewrites applied to math fragments before they are embedded in an image URL.
/// Order matters: later rules see the output of earlier ones.
const MATH_RULES: &[(&str, &str)] = &[
    (" ", "%20"),
    ("&", "%20"),
    ("$", "%20"),
    ("\\sfrac", "\\frac"),
];

/// Explicit `\\` line breaks in prose.
const TEXT_RULES: &[(&str, &str)] = &[("\\\\", "\n")];

/// Apply each `(from, to)` rule once, left to right, over the whole string.
///
/// Replaced text is never rescanned by the same rule, so a `to` containing
/// `from` terminates.
pub fn substitute(s: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}

pub fn escape_math(s: &str) -> String {
    substitute(s, MATH_RULES)
}

pub fn text_line_breaks(s: &str) -> String {
    substitute(s, TEXT_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_math() {
        assert_eq!(escape_math("a & b"), "a%20%20%20b");
        assert_eq!(escape_math("$x$"), "%20x%20");
        assert_eq!(escape_math("\\sfrac{1}{2}"), "\\frac{1}{2}");
        assert_eq!(escape_math("x^2"), "x^2");
    }

    #[test]
    fn test_replacement_not_rescanned() {
        assert_eq!(substitute("aa", &[("a", "aa")]), "aaaa");
        assert_eq!(substitute("%20", &[("%", "%20")]), "%2020");
    }

    #[test]
    fn test_rules_apply_in_order() {
        // `\sfrac` survives the whitespace rules untouched.
        assert_eq!(escape_math("\\sfrac 1 2"), "\\frac%201%202");
        assert_eq!(substitute("ab", &[("a", "b"), ("b", "c")]), "cc");
    }

    #[test]
    fn test_text_line_breaks() {
        assert_eq!(text_line_breaks("line1\\\\line2"), "line1\nline2");
        assert_eq!(text_line_breaks("a\\\\\\b"), "a\n\\b");
        assert_eq!(text_line_breaks("\\frac"), "\\frac");
    }
}
