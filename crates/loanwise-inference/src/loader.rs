//! Startup-time artifact selection from configuration.

use std::path::Path;
use std::sync::Arc;

use loanwise_core::config::{ArtifactConfig, ArtifactKind};
use loanwise_core::errors::{ConfigError, LoanwiseResult};
use loanwise_core::models::FeatureSchema;
use loanwise_core::traits::IInferenceService;
use tracing::info;

use crate::logistic::LogisticArtifact;
use crate::onnx::OnnxClassifier;

/// Load the configured artifact once, for sharing across requests.
pub fn load_service(config: &ArtifactConfig) -> LoanwiseResult<Arc<dyn IInferenceService>> {
    let kind = config
        .artifact_kind()
        .map_err(|message| ConfigError::ValidationFailed {
            field: "artifact.kind".to_string(),
            message,
        })?;
    let path = config
        .path
        .as_deref()
        .ok_or_else(|| ConfigError::ValidationFailed {
            field: "artifact.path".to_string(),
            message: "an artifact path is required".to_string(),
        })?;

    let service: Arc<dyn IInferenceService> = match kind {
        ArtifactKind::Logistic => Arc::new(LogisticArtifact::load(Path::new(path))?),
        ArtifactKind::Onnx => {
            let schema = FeatureSchema::new(config.feature_names.iter().cloned()).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "artifact.feature_names".to_string(),
                    message: e.to_string(),
                }
            })?;
            Arc::new(OnnxClassifier::load(path, schema, config.intra_threads)?)
        }
    };

    info!(
        artifact = service.name(),
        kind = %kind,
        features = service.feature_names().len(),
        "inference artifact ready"
    );
    Ok(service)
}
