//! Rubric CLI entrypoint.
//!
//! Usage: `rubric <data_source> <ground_truth> [solution...]`
//!
//! The solution is taken from the remaining arguments, or from stdin when none
//! are given. The outcome is printed as JSON: a bare number for a delegated
//! score, a diagnostic record otherwise.

use std::io::Read;

use rubric::config::Config;
use rubric::scoring::{HashAnswerScorer, ScoreOutcome, TagRewardPolicy};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let mut args = std::env::args().skip(1);
    let (Some(data_source), Some(ground_truth)) = (args.next(), args.next()) else {
        eprintln!("usage: rubric <data_source> <ground_truth> [solution...]");
        std::process::exit(2);
    };

    let rest: Vec<String> = args.collect();
    let solution = if rest.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        rest.join(" ")
    };

    let policies = [
        TagRewardPolicy::new(
            rubric::GSM8K_DATA_SOURCE,
            rubric::AnswerSyntax::PlainNumber,
            &config.tags,
        )?,
        TagRewardPolicy::new(
            rubric::DEEPSCALER_DATA_SOURCE,
            rubric::AnswerSyntax::FractionOrNumber,
            &config.tags,
        )?,
    ];

    let default_scorer = HashAnswerScorer::new();

    // Route through the policy bound to this dataset; any policy delegates on a
    // mismatch, so an arbitrary dataset still gets the default scorer.
    let policy = policies
        .iter()
        .find(|policy| policy.data_source() == data_source)
        .unwrap_or(&policies[0]);

    let outcome: ScoreOutcome = policy.compute_score(
        &default_scorer,
        &data_source,
        &solution,
        &ground_truth,
        None,
        config.fallback_to_default,
    )?;

    tracing::info!(
        data_source = %data_source,
        status = outcome.debug_status(),
        score = outcome.score(),
        "scored rollout"
    );

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
