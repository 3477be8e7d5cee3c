//! Logistic-regression pipeline artifact stored as JSON.
//!
//! Mirrors a fitted `StandardScaler` → `LogisticRegression` pipeline:
//! `p = sigmoid(intercept + Σ coef_i · (x_i − mean_i) / scale_i)`.

use std::path::Path;

use loanwise_core::constants::DEFAULT_DECISION_THRESHOLD;
use loanwise_core::errors::InferenceError;
use loanwise_core::models::{FeatureRow, FeatureSchema};
use loanwise_core::traits::IInferenceService;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Standard-scaler parameters, one entry per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk layout of the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArtifactFile {
    #[serde(default)]
    name: Option<String>,
    feature_names_in: Vec<String>,
    #[serde(default)]
    scaler: Option<ScalerParams>,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_DECISION_THRESHOLD
}

/// A loaded, validated logistic pipeline.
#[derive(Debug, Clone)]
pub struct LogisticArtifact {
    name: String,
    schema: FeatureSchema,
    scaler: Option<ScalerParams>,
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl LogisticArtifact {
    /// Load an artifact from a JSON file.
    ///
    /// # Errors
    /// Returns `InferenceError::ArtifactLoadFailed` if the file is missing,
    /// malformed, or internally inconsistent.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| InferenceError::ArtifactLoadFailed {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        let artifact = Self::from_json(&content, &origin)?;
        debug!(
            artifact = %artifact.name,
            features = artifact.schema.len(),
            "logistic artifact loaded"
        );
        Ok(artifact)
    }

    /// Parse an artifact from a JSON string. `origin` names it in errors.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, InferenceError> {
        let fail = |reason: String| InferenceError::ArtifactLoadFailed {
            path: origin.to_string(),
            reason,
        };

        let file: ArtifactFile = serde_json::from_str(json).map_err(|e| fail(e.to_string()))?;
        let schema = FeatureSchema::new(file.feature_names_in).map_err(|e| fail(e.to_string()))?;
        let n = schema.len();

        if file.coefficients.len() != n {
            return Err(fail(format!(
                "{} coefficients for {n} features",
                file.coefficients.len()
            )));
        }
        if !file.coefficients.iter().all(|c| c.is_finite()) || !file.intercept.is_finite() {
            return Err(fail("coefficients and intercept must be finite".to_string()));
        }
        if !(0.0..=1.0).contains(&file.threshold) {
            return Err(fail(format!("threshold {} outside [0, 1]", file.threshold)));
        }
        if let Some(ref scaler) = file.scaler {
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(fail(format!(
                    "scaler has {} means and {} scales for {n} features",
                    scaler.mean.len(),
                    scaler.scale.len()
                )));
            }
            if !scaler.mean.iter().all(|m| m.is_finite()) {
                return Err(fail("scaler means must be finite".to_string()));
            }
            if scaler.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
                return Err(fail("scaler scales must be finite and non-zero".to_string()));
            }
        }

        let name = file.name.unwrap_or_else(|| {
            Path::new(origin)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("logistic")
                .to_string()
        });

        Ok(Self {
            name,
            schema,
            scaler: file.scaler,
            coefficients: file.coefficients,
            intercept: file.intercept,
            threshold: file.threshold,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Positive-class probability for one row already in schema order.
    pub fn probability(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        if !row.matches(&self.schema) {
            return Err(InferenceError::Rejected {
                reason: format!(
                    "row columns {:?} do not match artifact features {:?}",
                    row.names(),
                    self.schema.names()
                ),
            });
        }

        let z = row
            .values()
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let scaled = match self.scaler {
                    Some(ref s) => (x - s.mean[i]) / s.scale[i],
                    None => x,
                };
                self.coefficients[i] * scaled
            })
            .sum::<f64>()
            + self.intercept;

        Ok(sigmoid(z))
    }
}

/// Logistic function, stable for large |z|.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl IInferenceService for LogisticArtifact {
    fn feature_names(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict(&self, batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceError> {
        batch
            .iter()
            .map(|row| Ok(u8::from(self.probability(row)? >= self.threshold)))
            .collect()
    }

    fn predict_proba(&self, batch: &[FeatureRow]) -> Result<Vec<[f64; 2]>, InferenceError> {
        batch
            .iter()
            .map(|row| {
                let p = self.probability(row)?;
                Ok([1.0 - p, p])
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
