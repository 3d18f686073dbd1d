//! Literal answer-tag extraction.
//!
//! Markers are matched as literal, case-sensitive substrings. This module always
//! uses the **first** tag occurrence; the scoring policies scan for the last one
//! themselves (see [`crate::scoring`]).

/// Returns the content strictly between the first occurrence of `prefix` and the
/// next occurrence of `suffix` after it, trimmed of surrounding whitespace.
///
/// Returns `None` if `text` is empty, either marker is missing, or `suffix` does
/// not occur after the found `prefix`.
pub fn extract_between_tags<'a>(text: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if text.is_empty() {
        return None;
    }
    let start = text.find(prefix)? + prefix.len();
    let end = text[start..].find(suffix)? + start;
    Some(text[start..end].trim())
}

/// Removes every literal occurrence of `prefix` and `suffix` from `text`.
///
/// Content that was inside tags remains, unwrapped; all other content and
/// ordering is preserved.
///
/// ```
/// use rubric::constants::{DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX};
/// use rubric::tags::remove_tags;
///
/// let out = remove_tags(
///     "Hello <answer>42</answer> World",
///     DEFAULT_ANSWER_TAG_PREFIX,
///     DEFAULT_ANSWER_TAG_SUFFIX,
/// );
/// assert_eq!(out, "Hello 42 World");
/// ```
pub fn remove_tags(text: &str, prefix: &str, suffix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.replace(prefix, "").replace(suffix, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX};

    fn extract(text: &str) -> Option<&str> {
        extract_between_tags(text, DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX)
    }

    #[test]
    fn test_extract_basic() {
        assert_eq!(extract("abc <answer>42</answer> xyz"), Some("42"));
    }

    #[test]
    fn test_extract_trims_whitespace() {
        assert_eq!(extract("<answer>  13\n</answer>"), Some("13"));
    }

    #[test]
    fn test_extract_missing_tags() {
        assert_eq!(extract("no tags here"), None);
    }

    #[test]
    fn test_extract_empty_input() {
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_extract_missing_suffix() {
        assert_eq!(extract("prefix only <answer>42"), None);
    }

    #[test]
    fn test_extract_suffix_before_prefix() {
        // The suffix must occur after the prefix, not anywhere in the text.
        assert_eq!(extract("</answer> then <answer>42"), None);
    }

    #[test]
    fn test_extract_uses_first_occurrence() {
        let s = "<answer>1</answer> later <answer>2</answer>";
        assert_eq!(extract(s), Some("1"));
    }

    #[test]
    fn test_extract_empty_content() {
        assert_eq!(extract("<answer></answer>"), Some(""));
        assert_eq!(extract("<answer>   </answer>"), Some(""));
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        assert_eq!(extract("<ANSWER>42</ANSWER>"), None);
    }

    #[test]
    fn test_extract_custom_markers() {
        let got = extract_between_tags("x [final]7[/final] y", "[final]", "[/final]");
        assert_eq!(got, Some("7"));
    }

    #[test]
    fn test_remove_tags_keeps_inner() {
        let out = remove_tags(
            "Hello <answer>42</answer> World",
            DEFAULT_ANSWER_TAG_PREFIX,
            DEFAULT_ANSWER_TAG_SUFFIX,
        );
        assert_eq!(out, "Hello 42 World");
    }

    #[test]
    fn test_remove_tags_multiple_occurrences() {
        let out = remove_tags(
            "<answer>1</answer> and <answer>2</answer>",
            DEFAULT_ANSWER_TAG_PREFIX,
            DEFAULT_ANSWER_TAG_SUFFIX,
        );
        assert_eq!(out, "1 and 2");
    }

    #[test]
    fn test_remove_tags_no_tags_unchanged() {
        let out = remove_tags("plain text", DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX);
        assert_eq!(out, "plain text");
    }

    #[test]
    fn test_remove_tags_empty_input() {
        let out = remove_tags("", DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX);
        assert_eq!(out, "");
    }
}
