//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use loanwise_core::config::CliOverrides;
use loanwise_core::models::{MissingPolicy, RawValue};

use crate::input::parse_field;

#[derive(Debug, Parser)]
#[command(name = "loanwise", version, about = "Loan approval decisions from applicant details")]
pub struct Cli {
    /// Config file (defaults to ./loanwise.toml when present)
    #[arg(long, short, global = true, env = "LOANWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Artifact path, overriding the config file
    #[arg(long, global = true)]
    pub artifact: Option<String>,

    /// Log level for loanwise targets
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile applicant fields and print the approve/reject decision
    Predict {
        #[command(flatten)]
        input: InputArgs,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the reconciled feature row without running inference
    Reconcile {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the artifact's feature names and how each is encoded
    Schema,
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Applicant file (.json, otherwise TOML)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Field value as NAME=VALUE; repeatable, wins over --input
    #[arg(long = "field", short = 'f', value_parser = parse_field)]
    pub fields: Vec<(String, RawValue)>,

    /// Missing-column policy: zero_fill or reject_incomplete
    #[arg(long, value_parser = parse_policy)]
    pub policy: Option<MissingPolicy>,
}

fn parse_policy(s: &str) -> Result<MissingPolicy, String> {
    s.parse()
}

impl Cli {
    /// Config overrides carried by the command line.
    pub fn overrides(&self) -> CliOverrides {
        let missing_policy = match &self.command {
            Command::Predict { input, .. } | Command::Reconcile { input } => input.policy,
            Command::Schema => None,
        };
        CliOverrides {
            missing_policy,
            artifact_path: self.artifact.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
