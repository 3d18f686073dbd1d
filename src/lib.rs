//! Rubric: deterministic answer grading for RL fine-tuning on math problems.
//!
//! Locates a model's final answer inside verbose reasoning text, normalizes it
//! into a comparable canonical form, and produces a deterministic score plus
//! diagnostics. The crate never judges mathematical reasoning; it compares two
//! strings after normalization.
//!
//! # Public API Surface
//!
//! ## Extraction
//! - [`extract_between_tags`], [`remove_tags`] - literal answer-tag handling
//! - [`extract_final_answer`] - tag content first, last number as fallback
//!
//! ## Canonicalization & Matching
//! - [`canonicalize_answers`], [`answers_match`], [`MatchResult`] - symmetric
//!   numeric-or-text comparison
//!
//! ## Reward Scoring
//! - [`TagRewardPolicy`] - dataset-bound policies (GSM8K, DeepScaleR) with
//!   last-tag-wins grading and default-scorer delegation
//! - [`DefaultScorer`], [`HashAnswerScorer`] - the external collaborator seam
//! - [`ScoreOutcome`], [`ScoreRecord`] - delegated float vs. diagnostic record
//!
//! ## Diagnostics & Configuration
//! - [`build_mismatch_hint`] - fixed-template mismatch explanations
//! - [`Config`], [`ConfigError`] - env-backed runtime configuration
//! - [`TagConfig`] - injectable tag-marker overrides
//!
//! ## Test/Mock Support
//! A mock default scorer is available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Concurrency
//!
//! Every library operation is pure, synchronous, and stateless; calls are safe
//! from any number of parallel workers scoring independent rollouts.

pub mod canonical;
pub mod config;
pub mod constants;
pub mod extract;
pub mod hint;
pub mod scoring;
pub mod tags;

pub use canonical::{MatchResult, answers_match, canonicalize_answers};
pub use config::{Config, ConfigError};
pub use constants::{
    DEEPSCALER_DATA_SOURCE, DEFAULT_ANSWER_TAG_PREFIX, DEFAULT_ANSWER_TAG_SUFFIX,
    DEFAULT_MISMATCH_HINT_TEMPLATE, GSM8K_DATA_SOURCE, TagConfig, TagValidationError,
};
pub use extract::extract_final_answer;
pub use hint::build_mismatch_hint;
pub use scoring::{
    AnswerSyntax, DefaultScorer, HashAnswerScorer, ScoreOutcome, ScoreRecord, ScoringError,
    TagRewardPolicy,
};
pub use tags::{extract_between_tags, remove_tags};

#[cfg(any(test, feature = "mock"))]
pub use scoring::{MockDefaultScorer, RecordedCall};
