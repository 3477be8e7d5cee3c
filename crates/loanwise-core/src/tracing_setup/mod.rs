//! Tracing initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Name of the environment variable holding a full filter directive.
pub const LOG_ENV: &str = "LOANWISE_LOG";

/// Initialize the tracing subscriber.
///
/// `LOANWISE_LOG` (e.g. `LOANWISE_LOG=loanwise_reconcile=debug`) wins over the
/// configured level. Falls back to `loanwise=<log_level>`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

        if config.json {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Filter directive covering every `loanwise_*` crate at `level`.
pub fn default_directive(level: &str) -> String {
    format!("loanwise={level}")
}
