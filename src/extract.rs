//! Final-answer extraction: tag content first, last number as fallback.

use crate::canonical::canonicalize_numeric;
use crate::tags::extract_between_tags;

/// Extracts a model's final answer from its full output.
///
/// Tag extraction (first occurrence, see [`extract_between_tags`]) is attempted
/// first; non-empty tag content is returned **raw**, trimmed but never
/// canonicalized, so callers can inspect the untransformed parsed value even on a
/// failed match. When no usable tag content exists, the canonical form of the
/// last numeric token in the whole output is returned instead.
///
/// ```
/// use rubric::constants::{DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX};
/// use rubric::extract::extract_final_answer;
///
/// let got = extract_final_answer(
///     "thinking... <answer> 13 </answer> tail",
///     DEFAULT_ANSWER_TAG_PREFIX,
///     DEFAULT_ANSWER_TAG_SUFFIX,
/// );
/// assert_eq!(got.as_deref(), Some("13"));
/// ```
pub fn extract_final_answer(model_output: &str, prefix: &str, suffix: &str) -> Option<String> {
    if model_output.is_empty() {
        return None;
    }
    if let Some(inner) = extract_between_tags(model_output, prefix, suffix) {
        if !inner.is_empty() {
            return Some(inner.to_string());
        }
    }
    canonicalize_numeric(model_output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX};

    fn extract(text: &str) -> Option<String> {
        extract_final_answer(text, DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX)
    }

    #[test]
    fn test_prefers_tag_content() {
        assert_eq!(
            extract("thinking... <answer> 13 </answer> tail"),
            Some("13".to_string())
        );
    }

    #[test]
    fn test_tag_content_returned_raw() {
        // Tag content is not canonicalized: trailing zeros survive.
        assert_eq!(extract("<answer>3.50</answer>"), Some("3.50".to_string()));
        assert_eq!(
            extract("<answer>six dozen</answer>"),
            Some("six dozen".to_string())
        );
    }

    #[test]
    fn test_first_tag_occurrence_wins() {
        assert_eq!(
            extract("<answer>1</answer> <answer>2</answer>"),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_numeric_fallback() {
        assert_eq!(extract("some calc -> -7 and done"), Some("-7".to_string()));
    }

    #[test]
    fn test_empty_tag_falls_back_to_numbers() {
        assert_eq!(extract("got 5 <answer></answer>"), Some("5".to_string()));
    }

    #[test]
    fn test_fallback_is_canonical() {
        // The fallback path normalizes, unlike the tag path.
        assert_eq!(extract("approx 3.50"), Some("3.5".to_string()));
    }

    #[test]
    fn test_nothing_extractable() {
        assert_eq!(extract("no answer anywhere"), None);
        assert_eq!(extract(""), None);
    }
}
