//! Top-level Loanwise configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ArtifactConfig, ArtifactKind, ObservabilityConfig, ReconcileConfig};
use crate::constants::PROJECT_CONFIG_FILENAME;
use crate::errors::ConfigError;
use crate::models::MissingPolicy;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LOANWISE_*`)
/// 3. Config file (explicit path, or `loanwise.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoanwiseConfig {
    pub reconcile: ReconcileConfig,
    pub artifact: ArtifactConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub missing_policy: Option<MissingPolicy>,
    pub artifact_path: Option<String>,
    pub log_level: Option<String>,
}

impl LoanwiseConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must exist. Without one, `loanwise.toml` in the
    /// working directory is used when present.
    pub fn load(
        path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let project = Path::new(PROJECT_CONFIG_FILENAME);
                if project.exists() {
                    Self::from_file(project)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `LOANWISE_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(defaults::ENV_MISSING_POLICY) {
            self.reconcile.missing_policy =
                policy.parse().map_err(|message| ConfigError::InvalidValue {
                    field: defaults::ENV_MISSING_POLICY.to_string(),
                    message,
                })?;
        }
        if let Some(path) = lookup(defaults::ENV_ARTIFACT_PATH) {
            self.artifact.path = Some(path);
        }
        if let Some(level) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        Ok(())
    }

    /// Apply command-line overrides. Only `Some` values replace config values.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(policy) = cli.missing_policy {
            self.reconcile.missing_policy = policy;
        }
        if let Some(ref path) = cli.artifact_path {
            self.artifact.path = Some(path.clone());
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let kind = self
            .artifact
            .artifact_kind()
            .map_err(|message| ConfigError::ValidationFailed {
                field: "artifact.kind".to_string(),
                message,
            })?;

        if kind == ArtifactKind::Onnx && self.artifact.feature_names.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "artifact.feature_names".to_string(),
                message: "required for onnx artifacts".to_string(),
            });
        }
        if self.artifact.intra_threads == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "artifact.intra_threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref path) = self.artifact.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "artifact.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
