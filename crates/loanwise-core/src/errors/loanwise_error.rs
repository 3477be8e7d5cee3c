//! Top-level error aggregating every subsystem.

use super::error_code::LoanwiseErrorCode;
use super::{ConfigError, InferenceError, ReconcileError};

/// Any error a single submit action can produce.
#[derive(Debug, thiserror::Error)]
pub enum LoanwiseError {
    #[error("Reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LoanwiseErrorCode for LoanwiseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Reconcile(e) => e.error_code(),
            Self::Inference(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type LoanwiseResult<T> = Result<T, LoanwiseError>;
