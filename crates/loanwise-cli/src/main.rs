use std::process::ExitCode;

use clap::Parser;
use loanwise_cli::{render, run, Cli};
use loanwise_core::errors::{LoanwiseError, LoanwiseErrorCode};
use loanwise_core::tracing_setup::init_tracing;
use loanwise_core::LoanwiseConfig;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match LoanwiseConfig::load(cli.config.as_deref(), Some(&cli.overrides())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", LoanwiseError::from(e).user_message());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.observability);
    info!(version = loanwise_core::constants::VERSION, "loanwise starting");

    match run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render::error_text(&e));
            ExitCode::FAILURE
        }
    }
}
