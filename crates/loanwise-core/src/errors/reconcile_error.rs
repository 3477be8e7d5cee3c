//! Reconciliation errors.

use super::error_code::{self, LoanwiseErrorCode};

/// Errors raised while turning raw input into a feature row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReconcileError {
    /// The row could not be made to cover the schema exactly.
    #[error(
        "schema mismatch: missing [{}], extra [{}]",
        .missing.join(", "),
        .extra.join(", ")
    )]
    SchemaMismatch {
        missing: Vec<String>,
        extra: Vec<String>,
    },

    /// A raw value is outside the known vocabulary of its field.
    #[error("invalid encoding for {field}: {value:?} (expected {expected})")]
    InvalidEncoding {
        field: String,
        value: String,
        expected: String,
    },
}

impl ReconcileError {
    /// Shorthand for a mismatch that only has unresolved names.
    pub fn missing(names: Vec<String>) -> Self {
        Self::SchemaMismatch {
            missing: names,
            extra: Vec::new(),
        }
    }

    /// Shorthand for a mismatch that only has undeclared names.
    pub fn extra(names: Vec<String>) -> Self {
        Self::SchemaMismatch {
            missing: Vec::new(),
            extra: names,
        }
    }
}

impl LoanwiseErrorCode for ReconcileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::InvalidEncoding { .. } => error_code::INVALID_ENCODING,
        }
    }
}
