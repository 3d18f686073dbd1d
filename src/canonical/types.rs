use serde::Serialize;

/// Outcome of a single answer comparison.
///
/// Carries both canonical forms so callers can log or inspect exactly what was
/// compared. Created per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Whether the two canonical forms are exactly equal.
    pub is_match: bool,
    /// Canonical form of the predicted answer.
    pub pred_canonical: String,
    /// Canonical form of the ground-truth answer.
    pub truth_canonical: String,
}

impl MatchResult {
    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        if self.is_match { "MATCH" } else { "MISMATCH" }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (pred: '{}', truth: '{}')",
            self.debug_status(),
            self.pred_canonical,
            self.truth_canonical
        )
    }
}
