//! Answer canonicalization and matching.
//!
//! Two canonical forms exist: a decimal-exact numeric rendering of the last
//! numeric token ([`numeric`]) and a lowercased, punctuation-stripped text
//! rendering ([`text`]). Matching is symmetric: numeric canonicalization is
//! attempted on both sides independently, and if either side fails, **both**
//! sides fall back to text mode. A prediction is never compared numeric-vs-text.
//!
//! Equality is exact string equality of the two canonical forms; no numeric
//! tolerance is applied. That is why canonicalization must be deterministic and
//! total: two numerically equal inputs must normalize to bit-identical output.

pub mod numeric;
pub mod text;
pub mod types;

pub use numeric::canonicalize_numeric;
pub use text::canonicalize_text;
pub use types::MatchResult;

/// Canonicalizes `pred` and `truth` for comparison.
///
/// With `numeric_only` set, the numeric form is used when both sides yield one;
/// otherwise both sides are text-canonicalized. With `numeric_only` unset, text
/// mode is used unconditionally.
pub fn canonicalize_answers(pred: &str, truth: &str, numeric_only: bool) -> (String, String) {
    if numeric_only {
        if let (Some(pred_num), Some(truth_num)) =
            (canonicalize_numeric(pred), canonicalize_numeric(truth))
        {
            return (pred_num, truth_num);
        }
    }
    (canonicalize_text(pred), canonicalize_text(truth))
}

/// Compares `pred` against `truth` after canonicalization.
///
/// ```
/// use rubric::canonical::answers_match;
///
/// assert!(answers_match("the result is 42", "42", true).is_match);
/// assert!(answers_match("answer: 3.50", "3.5", true).is_match);
/// assert!(!answers_match("abc", "42", true).is_match);
/// ```
pub fn answers_match(pred: &str, truth: &str, numeric_only: bool) -> MatchResult {
    let (pred_canonical, truth_canonical) = canonicalize_answers(pred, truth, numeric_only);
    MatchResult {
        is_match: pred_canonical == truth_canonical,
        pred_canonical,
        truth_canonical,
    }
}
