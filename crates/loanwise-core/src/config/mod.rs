//! Configuration: compiled defaults, `loanwise.toml`, environment, CLI flags.

pub mod artifact_config;
pub mod defaults;
pub mod loanwise_config;
pub mod observability_config;
pub mod reconcile_config;

pub use artifact_config::{ArtifactConfig, ArtifactKind};
pub use loanwise_config::{CliOverrides, LoanwiseConfig};
pub use observability_config::ObservabilityConfig;
pub use reconcile_config::ReconcileConfig;
