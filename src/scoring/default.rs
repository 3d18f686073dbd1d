//! The dataset-agnostic default-scorer collaborator.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::error::ScoringError;

/// External scoring collaborator invoked when a dataset-specific policy does not
/// apply or cannot parse an answer.
///
/// Implementations may fail; the policies propagate such failures unchanged and
/// impose no retry or timeout behavior.
pub trait DefaultScorer {
    /// Scores `solution_str` against `ground_truth` for `data_source`.
    fn compute_score(
        &self,
        data_source: &str,
        solution_str: &str,
        ground_truth: &str,
        extra_info: Option<&Value>,
    ) -> Result<f64, ScoringError>;
}

/// Matches the `#### <number>` answer convention used by GSM8K-style solutions.
static HASH_ANSWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#### (-?[0-9.,]+)").unwrap());

/// Built-in default scorer reading answers written after `####`.
///
/// Takes the last `#### <number>` occurrence, strips thousands-separator
/// commas, and scores 1.0 on exact equality with the ground truth. Solutions
/// without the marker score 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashAnswerScorer;

impl HashAnswerScorer {
    /// Creates the scorer.
    pub fn new() -> Self {
        Self
    }
}

impl DefaultScorer for HashAnswerScorer {
    fn compute_score(
        &self,
        data_source: &str,
        solution_str: &str,
        ground_truth: &str,
        _extra_info: Option<&Value>,
    ) -> Result<f64, ScoringError> {
        let Some(captures) = HASH_ANSWER_RE.captures_iter(solution_str).last() else {
            debug!(data_source, "no #### answer marker in solution");
            return Ok(0.0);
        };
        let answer = captures
            .get(1)
            .map_or("", |token| token.as_str())
            .replace(',', "");

        let score = if answer == ground_truth { 1.0 } else { 0.0 };
        debug!(data_source, answer = %answer, score, "hash-marker answer scored");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(solution: &str, truth: &str) -> f64 {
        HashAnswerScorer::new()
            .compute_score("openai/gsm8k", solution, truth, None)
            .unwrap()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(score("work work #### 7", "7"), 1.0);
    }

    #[test]
    fn test_wrong_answer() {
        assert_eq!(score("work work #### 8", "7"), 0.0);
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(score("no marker at all", "7"), 0.0);
    }

    #[test]
    fn test_last_marker_wins() {
        assert_eq!(score("#### 5 revised #### 7", "7"), 1.0);
    }

    #[test]
    fn test_comma_stripped() {
        assert_eq!(score("#### 1,234", "1234"), 1.0);
    }

    #[test]
    fn test_negative_answer() {
        assert_eq!(score("#### -12", "-12"), 1.0);
    }
}
