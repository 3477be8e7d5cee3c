use crate::errors::InferenceError;
use crate::models::{FeatureRow, FeatureSchema};

/// A loaded, immutable binary classification artifact.
///
/// Loaded once at process start and shared read-only across requests.
pub trait IInferenceService: Send + Sync {
    /// Feature names the artifact was fit against, in column order.
    fn feature_names(&self) -> &FeatureSchema;

    /// Class index (0 or 1) for each row of the batch.
    fn predict(&self, batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceError>;

    /// `[negative, positive]` class probabilities for each row of the batch.
    fn predict_proba(&self, batch: &[FeatureRow]) -> Result<Vec<[f64; 2]>, InferenceError>;

    /// Human-readable artifact name.
    fn name(&self) -> &str;
}
