//! LoanwiseErrorCode trait for the presentation boundary.

/// Stable, machine-readable codes for every error surfaced to a user.
pub trait LoanwiseErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the user-facing string: `[ERROR_CODE] message`.
    fn user_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const INVALID_ENCODING: &str = "INVALID_ENCODING";
pub const INFERENCE_ERROR: &str = "INFERENCE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
