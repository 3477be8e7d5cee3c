//! Error handling for Loanwise.
//! One error enum per subsystem, `thiserror` only. `anyhow` stays in the binary.

pub mod config_error;
pub mod error_code;
pub mod inference_error;
pub mod loanwise_error;
pub mod reconcile_error;

pub use config_error::ConfigError;
pub use error_code::LoanwiseErrorCode;
pub use inference_error::InferenceError;
pub use loanwise_error::{LoanwiseError, LoanwiseResult};
pub use reconcile_error::ReconcileError;
