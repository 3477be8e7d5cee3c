//! Subcommand execution. Each call is one stateless submit action.

use anyhow::Result;
use loanwise_core::LoanwiseConfig;
use loanwise_inference::{load_service, InferenceEngine};
use loanwise_reconcile::Reconciler;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::input::collect_input;
use crate::render;

/// Run the parsed command against a resolved config and return the text to print.
pub fn run(cli: &Cli, config: &LoanwiseConfig) -> Result<String> {
    let service = load_service(&config.artifact)?;
    let reconciler = Reconciler::default();
    let engine = InferenceEngine::new(service, reconciler, config.reconcile.missing_policy);
    debug!(policy = %engine.policy(), "engine ready");

    match &cli.command {
        Command::Predict { input, json } => {
            let raw = collect_input(input)?;
            let decision = engine.evaluate(&raw)?;
            if *json {
                Ok(render::decision_json(&decision)?)
            } else {
                Ok(render::decision_text(&decision))
            }
        }
        Command::Reconcile { input } => {
            let raw = collect_input(input)?;
            let row = engine.reconcile(&raw)?;
            Ok(serde_json::to_string_pretty(&row)?)
        }
        Command::Schema => Ok(render::schema_text(
            engine.service().feature_names(),
            &reconciler,
        )),
    }
}
