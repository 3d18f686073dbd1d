//! Cross-cutting, shared constants.
//!
//! The tag markers are compile-time defaults; callers that need different markers
//! pass a [`TagConfig`] (or explicit marker arguments) instead of mutating globals.

use thiserror::Error;

/// Opening marker delimiting a model's intended final answer.
pub const DEFAULT_ANSWER_TAG_PREFIX: &str = "<answer>";

/// Closing marker delimiting a model's intended final answer.
pub const DEFAULT_ANSWER_TAG_SUFFIX: &str = "</answer>";

/// Template used by [`build_mismatch_hint`](crate::hint::build_mismatch_hint) when
/// no custom template is supplied. `{truth}` and `{pred}` are substituted.
pub const DEFAULT_MISMATCH_HINT_TEMPLATE: &str =
    "Oops, I made an error, the final answer is ### {truth} but I got {pred}";

/// Dataset identifier for the GSM8K scoring policy.
pub const GSM8K_DATA_SOURCE: &str = "openai/gsm8k";

/// Dataset identifier for the DeepScaleR scoring policy.
pub const DEEPSCALER_DATA_SOURCE: &str = "agentica-org/DeepScaleR-Preview-Dataset";

/// Runtime tag-marker configuration for modules that support custom answer tags.
///
/// The compile-time constants remain as defaults; use
/// [`validate`](TagConfig::validate) at module boundaries to catch degenerate
/// marker pairs early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Opening marker.
    pub prefix: String,
    /// Closing marker.
    pub suffix: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ANSWER_TAG_PREFIX.to_string(),
            suffix: DEFAULT_ANSWER_TAG_SUFFIX.to_string(),
        }
    }
}

impl TagConfig {
    /// Creates a tag configuration with the given markers.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Validates that the marker pair is usable.
    ///
    /// Returns an error if either marker is empty or the two markers are equal
    /// (an equal pair makes "the next suffix after the prefix" ambiguous).
    pub fn validate(&self) -> Result<(), TagValidationError> {
        if self.prefix.is_empty() {
            return Err(TagValidationError::EmptyPrefix);
        }
        if self.suffix.is_empty() {
            return Err(TagValidationError::EmptySuffix);
        }
        if self.prefix == self.suffix {
            return Err(TagValidationError::IdenticalMarkers {
                marker: self.prefix.clone(),
            });
        }
        Ok(())
    }
}

/// Errors from [`TagConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagValidationError {
    /// Opening marker is the empty string.
    #[error("tag prefix must not be empty")]
    EmptyPrefix,

    /// Closing marker is the empty string.
    #[error("tag suffix must not be empty")]
    EmptySuffix,

    /// Both markers are the same string.
    #[error("tag prefix and suffix must differ (both are '{marker}')")]
    IdenticalMarkers { marker: String },
}
