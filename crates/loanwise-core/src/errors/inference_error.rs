//! Inference service errors.

use super::error_code::{self, LoanwiseErrorCode};

/// Errors raised by an inference artifact or while interpreting its output.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("artifact load failed: {path}: {reason}")]
    ArtifactLoadFailed { path: String, reason: String },

    #[error("inference rejected the row: {reason}")]
    Rejected { reason: String },

    #[error("inference returned invalid output: {reason}")]
    InvalidOutput { reason: String },
}

impl LoanwiseErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        error_code::INFERENCE_ERROR
    }
}
