//! Post-processing and cleanup utilities
//!
//! Whitespace cleanup applied to joined paragraph text.

use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Clean up joined paragraph text.
///
/// Two passes, in this order: three or more newlines become two, then any
/// run of two or more whitespace characters becomes a single space. The
/// second pass also folds the blank-line paragraph separators into spaces;
/// the order is kept as-is. The result is trimmed.
pub fn normalize_whitespace(text: &str) -> String {
    let text = EXCESS_NEWLINES.replace_all(text, "\n\n");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_separator_collapses_to_space() {
        assert_eq!(normalize_whitespace("First\n\nSecond"), "First Second");
    }

    #[test]
    fn test_excess_newlines_and_spaces() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb"), "a b");
        assert_eq!(normalize_whitespace("a    b\t\tc"), "a b c");
    }

    #[test]
    fn test_single_whitespace_is_kept() {
        assert_eq!(normalize_whitespace("a\tb\nc d"), "a\tb\nc d");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize_whitespace("  padded \n"), "padded");
        assert_eq!(normalize_whitespace(""), "");
    }
}
