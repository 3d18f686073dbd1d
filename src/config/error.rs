//! Configuration error types.

use thiserror::Error;

use crate::constants::TagValidationError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tag markers are degenerate (empty or identical).
    #[error(transparent)]
    Tag(#[from] TagValidationError),

    /// A boolean environment variable held an unrecognized value.
    #[error("invalid boolean for {name}: '{value}' (expected true/false/1/0)")]
    InvalidBool { name: &'static str, value: String },
}
