use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::MissingPolicy;

/// Reconciler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Policy for schema columns the input does not cover.
    pub missing_policy: MissingPolicy,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            missing_policy: defaults::DEFAULT_MISSING_POLICY,
        }
    }
}
