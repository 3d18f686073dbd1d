use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::constants::{DEEPSCALER_DATA_SOURCE, GSM8K_DATA_SOURCE, TagConfig, TagValidationError};

use super::default::DefaultScorer;
use super::error::ScoringError;
use super::extract::{AnswerSyntax, last_answer_token};
use super::types::{ScoreOutcome, ScoreRecord};

/// Pre-compiled scanner for the default `<answer>`/`</answer>` markers.
static DEFAULT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<answer>(.*?)</answer>").unwrap());

/// Dataset-specific reward policy reading answers from answer tags.
///
/// A policy is bound to one dataset identifier. Solutions for any other dataset
/// are delegated verbatim to the [`DefaultScorer`] collaborator, so a dispatcher
/// can route arbitrary datasets through many specialized policies transparently.
///
/// Unlike [`extract_final_answer`](crate::extract::extract_final_answer), this
/// path scans **all** tag occurrences and grades the **last** one, rewarding the
/// model's last self-correction rather than its first guess. Tag markers are
/// matched case-insensitively here, as reasoning models emit them with mixed
/// casing.
///
/// The comparison rule on parse success is exact string equality of the
/// comma-stripped parsed token against the ground truth verbatim. It does
/// **not** reuse the decimal canonicalization of
/// [`answers_match`](crate::canonical::answers_match); the two rules diverge in
/// observed behavior and must not be unified.
#[derive(Debug, Clone)]
pub struct TagRewardPolicy {
    data_source: String,
    syntax: AnswerSyntax,
    tag_re: Regex,
}

impl TagRewardPolicy {
    /// Policy for GSM8K: plain-number answers only.
    pub fn gsm8k() -> Self {
        Self {
            data_source: GSM8K_DATA_SOURCE.to_string(),
            syntax: AnswerSyntax::PlainNumber,
            tag_re: DEFAULT_TAG_RE.clone(),
        }
    }

    /// Policy for DeepScaleR: slash fractions take priority over plain numbers.
    pub fn deepscaler() -> Self {
        Self {
            data_source: DEEPSCALER_DATA_SOURCE.to_string(),
            syntax: AnswerSyntax::FractionOrNumber,
            tag_re: DEFAULT_TAG_RE.clone(),
        }
    }

    /// Policy for an arbitrary dataset with custom tag markers.
    pub fn new(
        data_source: impl Into<String>,
        syntax: AnswerSyntax,
        tags: &TagConfig,
    ) -> Result<Self, TagValidationError> {
        tags.validate()?;
        let pattern = format!(
            "(?is){}(.*?){}",
            regex::escape(&tags.prefix),
            regex::escape(&tags.suffix)
        );
        let tag_re =
            Regex::new(&pattern).expect("escaped tag markers always form a valid pattern");
        Ok(Self {
            data_source: data_source.into(),
            syntax,
            tag_re,
        })
    }

    /// The dataset identifier this policy grades itself.
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    /// Scores `solution_str` against `ground_truth`.
    ///
    /// - Dataset mismatch: the default scorer's bare result, verbatim
    ///   ([`ScoreOutcome::Delegated`]).
    /// - Tag found, token parsed: 1.0 on exact match, else 0.0.
    /// - No parseable token, `fallback_to_default` set: the default scorer's
    ///   result wrapped in a diagnostic record with `fallback: true`.
    /// - No parseable token otherwise: 0.0 with `fallback: false`.
    ///
    /// The only error is a collaborator failure, which propagates unchanged.
    pub fn compute_score(
        &self,
        default_scorer: &dyn DefaultScorer,
        data_source: &str,
        solution_str: &str,
        ground_truth: &str,
        extra_info: Option<&Value>,
        fallback_to_default: bool,
    ) -> Result<ScoreOutcome, ScoringError> {
        if data_source != self.data_source {
            debug!(
                policy = %self.data_source,
                data_source,
                "dataset mismatch, delegating to default scorer"
            );
            let score =
                default_scorer.compute_score(data_source, solution_str, ground_truth, extra_info)?;
            return Ok(ScoreOutcome::Delegated(score));
        }

        let mut used_answer_tag = false;
        let mut parsed_answer = None;
        if let Some(captures) = self.tag_re.captures_iter(solution_str).last() {
            used_answer_tag = true;
            let inner = captures.get(1).map_or("", |group| group.as_str());
            parsed_answer = last_answer_token(inner, self.syntax);
        }

        let Some(parsed_answer) = parsed_answer else {
            if fallback_to_default {
                debug!(
                    policy = %self.data_source,
                    used_answer_tag,
                    "no parseable tag answer, falling back to default scorer"
                );
                let score = default_scorer.compute_score(
                    data_source,
                    solution_str,
                    ground_truth,
                    extra_info,
                )?;
                return Ok(ScoreOutcome::Graded(ScoreRecord {
                    score,
                    used_answer_tag,
                    parsed_answer: None,
                    fallback: true,
                }));
            }
            return Ok(ScoreOutcome::Graded(ScoreRecord {
                score: 0.0,
                used_answer_tag,
                parsed_answer: None,
                fallback: false,
            }));
        };

        let score = if parsed_answer == ground_truth { 1.0 } else { 0.0 };
        debug!(
            policy = %self.data_source,
            parsed_answer = %parsed_answer,
            score,
            "graded tag answer"
        );
        Ok(ScoreOutcome::Graded(ScoreRecord {
            score,
            used_answer_tag,
            parsed_answer: Some(parsed_answer),
            fallback: false,
        }))
    }
}
