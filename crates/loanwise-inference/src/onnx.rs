//! ONNX Runtime classifier.
//!
//! Loads a binary classifier exported to ONNX (zipmap disabled) via the `ort`
//! crate (v2). The graph carries no feature names, so the column order comes
//! from configuration. Rows are fed positionally as a `[1, n]` f32 tensor.

use std::path::Path;
use std::sync::Mutex;

use loanwise_core::constants::{DEFAULT_DECISION_THRESHOLD, NEGATIVE_CLASS, POSITIVE_CLASS};
use loanwise_core::errors::InferenceError;
use loanwise_core::models::{FeatureRow, FeatureSchema};
use loanwise_core::traits::IInferenceService;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

/// Label and `[negative, positive]` probabilities for one row.
type RowOutput = (u8, [f64; 2]);

/// Probability tensor as read from the graph: shape and flat data.
type ProbabilityOutput = (Vec<i64>, Vec<f32>);

/// Label tensor as read from the graph.
#[derive(Debug, Clone, PartialEq)]
enum LabelOutput {
    /// The graph has no label output.
    Absent,
    Classes(Vec<i64>),
    /// A label output that is not an i64 tensor, e.g. string class names.
    Unreadable(String),
}

/// ONNX-based classifier using the `ort` crate.
pub struct OnnxClassifier {
    /// `run` needs `&mut Session`; the Mutex gives `&self` access.
    session: Mutex<Session>,
    /// Last row and its output; `predict` and `predict_proba` share one run.
    last: Mutex<Option<(FeatureRow, RowOutput)>>,
    schema: FeatureSchema,
    model_name: String,
}

impl OnnxClassifier {
    /// Load an ONNX model from the given path, with its column order.
    ///
    /// # Errors
    /// Returns `InferenceError::ArtifactLoadFailed` if the model cannot be loaded.
    pub fn load(
        model_path: &str,
        schema: FeatureSchema,
        intra_threads: usize,
    ) -> Result<Self, InferenceError> {
        let path = Path::new(model_path);
        let load_failed = |reason: String| InferenceError::ArtifactLoadFailed {
            path: model_path.to_string(),
            reason,
        };

        if !path.exists() {
            return Err(load_failed("model file not found".to_string()));
        }

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(intra_threads)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, features = schema.len(), "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            last: Mutex::new(None),
            schema,
            model_name,
        })
    }

    /// Output for one row, reusing the previous run when the row repeats.
    fn output_for(&self, row: &FeatureRow) -> Result<RowOutput, InferenceError> {
        let poisoned = |e: String| InferenceError::Rejected {
            reason: format!("output cache lock poisoned: {e}"),
        };

        {
            let last = self.last.lock().map_err(|e| poisoned(e.to_string()))?;
            if let Some((cached_row, output)) = last.as_ref() {
                if cached_row == row {
                    return Ok(*output);
                }
            }
        }

        let output = self.run(row)?;
        *self.last.lock().map_err(|e| poisoned(e.to_string()))? = Some((row.clone(), output));
        Ok(output)
    }

    /// Run the graph on one row.
    fn run(&self, row: &FeatureRow) -> Result<RowOutput, InferenceError> {
        if !row.matches(&self.schema) {
            return Err(InferenceError::Rejected {
                reason: format!(
                    "row columns {:?} do not match model features {:?}",
                    row.names(),
                    self.schema.names()
                ),
            });
        }

        let input = Tensor::from_array((vec![1i64, row.len() as i64], row.to_f32_vec()))
            .map_err(|e| InferenceError::Rejected {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self.session.lock().map_err(|e| InferenceError::Rejected {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| InferenceError::Rejected {
                reason: e.to_string(),
            })?;

        let mut label = LabelOutput::Absent;
        let mut probabilities: Option<ProbabilityOutput> = None;

        for (name, output) in outputs.iter() {
            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                if probabilities.is_none() {
                    probabilities = Some((shape.to_vec(), data.to_vec()));
                }
            } else if let Ok((_shape, data)) = output.try_extract_tensor::<i64>() {
                label = LabelOutput::Classes(data.to_vec());
            } else {
                label = LabelOutput::Unreadable(format!(
                    "output {name} holds neither f32 probabilities nor i64 class labels"
                ));
            }
        }

        interpret_outputs(label, probabilities)
    }
}

/// Turn the raw label and probability tensors of a one-row run into a `RowOutput`.
///
/// Probabilities must have shape `[1, 2]`. A label output, when present, must
/// hold exactly one binary class; graphs without one fall back to the default
/// decision threshold on the positive-class probability.
fn interpret_outputs(
    label: LabelOutput,
    probabilities: Option<ProbabilityOutput>,
) -> Result<RowOutput, InferenceError> {
    let invalid = |reason: String| InferenceError::InvalidOutput { reason };

    let (shape, data) =
        probabilities.ok_or_else(|| invalid("no probability tensor in model outputs".to_string()))?;
    let probabilities = match (shape.as_slice(), data.as_slice()) {
        ([1, 2], &[negative, positive]) => [f64::from(negative), f64::from(positive)],
        _ => {
            return Err(invalid(format!(
                "expected probabilities of shape [1, 2], got {shape:?} with {} values",
                data.len()
            )))
        }
    };

    let label = match label {
        LabelOutput::Absent => u8::from(probabilities[1] >= DEFAULT_DECISION_THRESHOLD),
        LabelOutput::Classes(classes) => match classes.as_slice() {
            &[class] => u8::try_from(class)
                .ok()
                .filter(|c| *c == POSITIVE_CLASS || *c == NEGATIVE_CLASS)
                .ok_or_else(|| invalid(format!("label {class} is not binary")))?,
            _ => return Err(invalid(format!("expected one label, got {}", classes.len()))),
        },
        LabelOutput::Unreadable(reason) => return Err(invalid(reason)),
    };

    Ok((label, probabilities))
}

impl IInferenceService for OnnxClassifier {
    fn feature_names(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict(&self, batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceError> {
        batch.iter().map(|row| self.output_for(row).map(|(label, _)| label)).collect()
    }

    fn predict_proba(&self, batch: &[FeatureRow]) -> Result<Vec<[f64; 2]>, InferenceError> {
        batch.iter().map(|row| self.output_for(row).map(|(_, p)| p)).collect()
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proba(negative: f32, positive: f32) -> Option<ProbabilityOutput> {
        Some((vec![1, 2], vec![negative, positive]))
    }

    #[test]
    fn binary_label_is_taken_as_is() {
        let (label, p) = interpret_outputs(LabelOutput::Classes(vec![0]), proba(0.3, 0.7)).unwrap();
        assert_eq!(label, 0);
        assert!((p[0] - 0.3).abs() < 1e-6 && (p[1] - 0.7).abs() < 1e-6);
    }

    #[test]
    fn missing_label_output_uses_default_threshold() {
        let (label, _) = interpret_outputs(LabelOutput::Absent, proba(0.3, 0.7)).unwrap();
        assert_eq!(label, 1);
        let (label, _) = interpret_outputs(LabelOutput::Absent, proba(0.6, 0.4)).unwrap();
        assert_eq!(label, 0);
        let (label, _) = interpret_outputs(LabelOutput::Absent, proba(0.5, 0.5)).unwrap();
        assert_eq!(label, 1);
    }

    #[test]
    fn non_binary_label_is_invalid_output() {
        for class in [-1, 2, 256] {
            let err = interpret_outputs(LabelOutput::Classes(vec![class]), proba(0.3, 0.7))
                .unwrap_err();
            assert!(matches!(err, InferenceError::InvalidOutput { .. }), "{class}: {err:?}");
        }
    }

    #[test]
    fn unreadable_label_is_invalid_output() {
        let label = LabelOutput::Unreadable("output label holds strings".to_string());
        let err = interpret_outputs(label, proba(0.3, 0.7)).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::InvalidOutput { ref reason } if reason.contains("strings")
        ));
    }

    #[test]
    fn label_count_must_be_one() {
        for classes in [vec![], vec![0, 1]] {
            let label = LabelOutput::Classes(classes);
            let err = interpret_outputs(label, proba(0.3, 0.7)).unwrap_err();
            assert!(matches!(err, InferenceError::InvalidOutput { .. }));
        }
    }

    #[test]
    fn probabilities_must_be_one_by_two() {
        let cases = [
            None,
            Some((vec![2], vec![0.3, 0.7])),
            Some((vec![1, 3], vec![0.2, 0.3, 0.5])),
            Some((vec![2, 2], vec![0.3, 0.7, 0.4, 0.6])),
        ];
        for probabilities in cases {
            let err = interpret_outputs(LabelOutput::Classes(vec![1]), probabilities).unwrap_err();
            assert!(matches!(err, InferenceError::InvalidOutput { .. }), "{err:?}");
        }
    }
}
