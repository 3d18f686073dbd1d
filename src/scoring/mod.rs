//! Dataset-specific reward policies.
//!
//! Each [`TagRewardPolicy`] grades one target dataset and delegates everything
//! else to an external [`DefaultScorer`] collaborator. Grading reads the **last**
//! answer-tag occurrence in the solution, extracts the last numeric (or
//! fractional) token from it, and compares the comma-stripped token against the
//! ground truth for exact equality.
//!
//! The result is a [`ScoreOutcome`]: a bare delegated score when the policy did
//! not apply, or a [`ScoreRecord`] with diagnostics when it did.

pub mod default;
pub mod error;
pub mod extract;
pub mod policy;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use default::{DefaultScorer, HashAnswerScorer};
pub use error::ScoringError;
pub use extract::{AnswerSyntax, last_answer_token};
pub use policy::TagRewardPolicy;
pub use types::{ScoreOutcome, ScoreRecord};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockDefaultScorer, RecordedCall};
