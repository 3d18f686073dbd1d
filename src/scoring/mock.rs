//! Mock default-scorer collaborator for tests.

use std::sync::Mutex;

use serde_json::Value;

use super::default::DefaultScorer;
use super::error::ScoringError;

/// One recorded invocation of the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub data_source: String,
    pub solution_str: String,
    pub ground_truth: String,
}

/// Default scorer that returns a fixed score (or a fixed failure) and records
/// every invocation for inspection.
#[derive(Debug)]
pub struct MockDefaultScorer {
    score: f64,
    fail: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockDefaultScorer {
    fn default() -> Self {
        Self::with_score(0.5)
    }
}

impl MockDefaultScorer {
    /// Mock that returns `score` for every invocation.
    pub fn with_score(score: f64) -> Self {
        Self {
            score,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock whose every invocation fails, for exercising error propagation.
    pub fn failing() -> Self {
        Self {
            score: 0.0,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Snapshot of all recorded invocations.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl DefaultScorer for MockDefaultScorer {
    fn compute_score(
        &self,
        data_source: &str,
        solution_str: &str,
        ground_truth: &str,
        _extra_info: Option<&Value>,
    ) -> Result<f64, ScoringError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                data_source: data_source.to_string(),
                solution_str: solution_str.to_string(),
                ground_truth: ground_truth.to_string(),
            });
        }
        if self.fail {
            return Err(ScoringError::default_scorer(
                data_source,
                "mock default scorer configured to fail",
            ));
        }
        Ok(self.score)
    }
}
