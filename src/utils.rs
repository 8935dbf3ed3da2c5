//! Text normalization helpers shared by the extractor and filter.
//!
//! Category labels on the source site are compared by exact equality
//! against a fixed allow-list, so the normalization order matters:
//! lowercase first, then collapse internal whitespace runs, then trim.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace (spaces, tabs, newlines) to a single space.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("Logistics \n  Industry"), "Logistics Industry");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").into_owned()
}

/// Normalize a category label for allow-list comparison.
///
/// Lowercases, collapses internal whitespace, and trims, in that order.
/// The result is what gets compared (by exact equality) against the
/// import allow-list.
pub fn normalize_category(s: &str) -> String {
    collapse_whitespace(&s.to_lowercase()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace_plain() {
        assert_eq!(collapse_whitespace("hello world"), "hello world");
    }

    #[test]
    fn test_collapse_whitespace_runs() {
        assert_eq!(collapse_whitespace("a  b\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_normalize_category_mixed_case_and_spacing() {
        assert_eq!(
            normalize_category("  Logistics \n   Industry "),
            "logistics industry"
        );
    }

    #[test]
    fn test_normalize_category_already_clean() {
        assert_eq!(
            normalize_category("logistics industry"),
            "logistics industry"
        );
    }

    #[test]
    fn test_normalize_category_empty() {
        assert_eq!(normalize_category(""), "");
        assert_eq!(normalize_category("   "), "");
    }
}
