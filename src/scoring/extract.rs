//! Last-token answer scanning for the scoring policies.
//!
//! Deliberately distinct from [`crate::canonical::numeric`]: the scoring path
//! keeps the matched token as-is apart from stripping thousands-separator
//! commas, with no decimal normalization. The two rules diverge in observed
//! behavior and are kept divergent on purpose (see the policy docs).

use once_cell::sync::Lazy;
use regex::Regex;

/// Full numeric tokens (e.g. `18`, `-2`, `1,234`, `3.14`). The comma-grouped
/// alternative comes first so `1,234` is captured whole, not as `1` and `234`.
static NUMBER_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?").unwrap());

/// Slash fractions like `-2/3`.
static FRACTION_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+/\d+").unwrap());

/// Answer-token grammar a scoring policy recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSyntax {
    /// Plain numbers only (GSM8K-style integer/decimal answers).
    PlainNumber,
    /// Slash fractions take priority over plain numbers (DeepScaleR-style).
    FractionOrNumber,
}

/// Extracts the answer token from `text` under the given syntax.
///
/// Fractions, when recognized, win outright over plain numbers; within a class
/// the **last** token wins, since later tokens in step-by-step reasoning are
/// more likely to be the model's final, corrected value. Plain-number tokens are
/// returned with thousands-separator commas stripped; fraction tokens are
/// returned verbatim.
pub fn last_answer_token(text: &str, syntax: AnswerSyntax) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if syntax == AnswerSyntax::FractionOrNumber {
        if let Some(fraction) = FRACTION_TOKEN_RE.find_iter(text).last() {
            return Some(fraction.as_str().to_string());
        }
    }
    let number = NUMBER_TOKEN_RE.find_iter(text).last()?;
    Some(number.as_str().replace(',', ""))
}
