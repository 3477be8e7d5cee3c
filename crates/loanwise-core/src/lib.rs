//! # loanwise-core
//!
//! Foundation crate for the Loanwise decision pipeline.
//! Defines the data model, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::LoanwiseConfig;
pub use errors::{LoanwiseError, LoanwiseResult};
pub use models::{
    Confidence, Decision, DecisionLabel, FeatureRow, FeatureSchema, MissingPolicy, RawInput,
    RawValue,
};
