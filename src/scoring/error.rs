use thiserror::Error;

/// Errors that can cross the scoring boundary.
///
/// Extraction and parsing never error; absence is represented as `None` in the
/// diagnostic record. The only failure mode is a fault inside the external
/// default-scorer collaborator, which propagates unchanged.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The default-scorer collaborator failed while scoring `data_source`.
    #[error("default scorer failed for '{data_source}': {source}")]
    DefaultScorer {
        data_source: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ScoringError {
    /// Wraps a collaborator failure for the given dataset.
    pub fn default_scorer(
        data_source: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DefaultScorer {
            data_source: data_source.into(),
            source: source.into(),
        }
    }
}
