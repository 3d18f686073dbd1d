use serde::Serialize;

/// Diagnostic record produced by a scoring policy for its own dataset.
///
/// Consumed by the training loop as an immediate reward signal; never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    /// Reward in `[0, 1]`.
    pub score: f64,
    /// Whether any answer-tag occurrence was found in the solution.
    pub used_answer_tag: bool,
    /// The comma-stripped token parsed from the last tag, if any.
    pub parsed_answer: Option<String>,
    /// Whether the score came from the default-scorer fallback.
    pub fallback: bool,
}

/// Outcome of [`compute_score`](super::TagRewardPolicy::compute_score).
///
/// Serializes untagged, so a delegated outcome is a bare number and a graded
/// outcome is the diagnostic record, matching the shape reward logs expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreOutcome {
    /// The policy did not apply; the default scorer's bare result, verbatim.
    Delegated(f64),
    /// The policy graded the solution itself (possibly via fallback).
    Graded(ScoreRecord),
}

impl ScoreOutcome {
    /// Returns the scalar reward regardless of variant.
    pub fn score(&self) -> f64 {
        match self {
            ScoreOutcome::Delegated(score) => *score,
            ScoreOutcome::Graded(record) => record.score,
        }
    }

    /// Returns `true` if the outcome came from dataset-mismatch delegation.
    pub fn is_delegated(&self) -> bool {
        matches!(self, ScoreOutcome::Delegated(_))
    }

    /// Returns the diagnostic record, if the policy graded the solution itself.
    pub fn as_record(&self) -> Option<&ScoreRecord> {
        match self {
            ScoreOutcome::Delegated(_) => None,
            ScoreOutcome::Graded(record) => Some(record),
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            ScoreOutcome::Delegated(_) => "DELEGATED",
            ScoreOutcome::Graded(record) if record.fallback => "GRADED_FALLBACK",
            ScoreOutcome::Graded(_) => "GRADED",
        }
    }
}

impl std::fmt::Display for ScoreOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreOutcome::Delegated(score) => write!(f, "DELEGATED (score: {:.4})", score),
            ScoreOutcome::Graded(record) => write!(
                f,
                "{} (score: {:.4}, used_answer_tag: {}, parsed_answer: {:?})",
                self.debug_status(),
                record.score,
                record.used_answer_tag,
                record.parsed_answer
            ),
        }
    }
}
