//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RUBRIC_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{DEFAULT_MISMATCH_HINT_TEMPLATE, TagConfig};

/// Scoring configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RUBRIC_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Answer-tag markers. Defaults: `<answer>` / `</answer>`.
    pub tags: TagConfig,

    /// Whether policies fall back to the default scorer when no tag answer
    /// parses. Default: `true`.
    pub fallback_to_default: bool,

    /// Template for mismatch hints (`{truth}` and `{pred}` placeholders).
    pub hint_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: TagConfig::default(),
            fallback_to_default: true,
            hint_template: DEFAULT_MISMATCH_HINT_TEMPLATE.to_string(),
        }
    }
}

impl Config {
    const ENV_TAG_PREFIX: &'static str = "RUBRIC_TAG_PREFIX";
    const ENV_TAG_SUFFIX: &'static str = "RUBRIC_TAG_SUFFIX";
    const ENV_FALLBACK_TO_DEFAULT: &'static str = "RUBRIC_FALLBACK_TO_DEFAULT";
    const ENV_HINT_TEMPLATE: &'static str = "RUBRIC_HINT_TEMPLATE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let prefix = Self::parse_string_from_env(Self::ENV_TAG_PREFIX, defaults.tags.prefix);
        let suffix = Self::parse_string_from_env(Self::ENV_TAG_SUFFIX, defaults.tags.suffix);
        let fallback_to_default = Self::parse_bool_from_env(
            Self::ENV_FALLBACK_TO_DEFAULT,
            defaults.fallback_to_default,
        )?;
        let hint_template =
            Self::parse_string_from_env(Self::ENV_HINT_TEMPLATE, defaults.hint_template);

        Ok(Self {
            tags: TagConfig::new(prefix, suffix),
            fallback_to_default,
            hint_template,
        })
    }

    /// Validates basic invariants (marker pair usable).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tags.validate()?;
        Ok(())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
