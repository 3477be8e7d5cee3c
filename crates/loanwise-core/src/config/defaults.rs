// Single source of truth for all default values.

use crate::models::MissingPolicy;

// --- Reconcile ---
pub const DEFAULT_MISSING_POLICY: MissingPolicy = MissingPolicy::RejectIncomplete;

// --- Artifact ---
pub const DEFAULT_ARTIFACT_KIND: &str = "logistic";
pub const DEFAULT_ONNX_INTRA_THREADS: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Environment ---
pub const ENV_MISSING_POLICY: &str = "LOANWISE_MISSING_POLICY";
pub const ENV_ARTIFACT_PATH: &str = "LOANWISE_ARTIFACT_PATH";
pub const ENV_LOG_LEVEL: &str = "LOANWISE_LOG_LEVEL";
