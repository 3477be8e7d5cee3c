//! InferenceEngine: one submit action: reconcile, check, infer, interpret.

use std::sync::Arc;

use loanwise_core::errors::{InferenceError, LoanwiseResult};
use loanwise_core::models::{
    Confidence, Decision, DecisionLabel, FeatureRow, MissingPolicy, RawInput,
};
use loanwise_core::traits::{IInferenceService, IReconciler};
use tracing::info;

/// Couples a reconciler with a shared, immutable inference service.
pub struct InferenceEngine<R: IReconciler> {
    service: Arc<dyn IInferenceService>,
    reconciler: R,
    policy: MissingPolicy,
}

impl<R: IReconciler> InferenceEngine<R> {
    pub fn new(service: Arc<dyn IInferenceService>, reconciler: R, policy: MissingPolicy) -> Self {
        Self {
            service,
            reconciler,
            policy,
        }
    }

    pub fn service(&self) -> &dyn IInferenceService {
        self.service.as_ref()
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Reconcile `raw` against the service's feature names.
    pub fn reconcile(&self, raw: &RawInput) -> LoanwiseResult<FeatureRow> {
        Ok(self
            .reconciler
            .reconcile(raw, self.service.feature_names(), self.policy)?)
    }

    /// Run the classifier on a single row.
    ///
    /// The row's key set must equal the service's feature names; columns are
    /// reordered by name when only the order differs.
    pub fn infer(&self, row: &FeatureRow) -> LoanwiseResult<Decision> {
        let _span = loanwise_core::inference_span!(self.service.name()).entered();

        let aligned = row.aligned_to(self.service.feature_names())?;
        let batch = std::slice::from_ref(&aligned);

        let labels = self.service.predict(batch)?;
        let probabilities = self.service.predict_proba(batch)?;
        let decision = interpret(&labels, &probabilities)?;

        info!(
            label = ?decision.label,
            probability = decision.probability.value(),
            "inference complete"
        );
        Ok(decision)
    }

    /// One submit action: reconcile then infer.
    pub fn evaluate(&self, raw: &RawInput) -> LoanwiseResult<Decision> {
        let row = self.reconcile(raw)?;
        self.infer(&row)
    }
}

/// Turn one-row classifier output into a `Decision`.
fn interpret(labels: &[u8], probabilities: &[[f64; 2]]) -> Result<Decision, InferenceError> {
    let (&class, &[negative, positive]) = match (labels, probabilities) {
        ([class], [pair]) => (class, pair),
        _ => {
            return Err(InferenceError::InvalidOutput {
                reason: format!(
                    "expected one label and one probability pair, got {} and {}",
                    labels.len(),
                    probabilities.len()
                ),
            })
        }
    };

    let label = DecisionLabel::from_class(class).ok_or_else(|| InferenceError::InvalidOutput {
        reason: format!("label {class} is not binary"),
    })?;

    if Confidence::checked(negative).is_none() {
        return Err(InferenceError::InvalidOutput {
            reason: format!("negative-class probability {negative} out of range"),
        });
    }
    let probability = Confidence::checked(positive).ok_or_else(|| InferenceError::InvalidOutput {
        reason: format!("positive-class probability {positive} out of range"),
    })?;

    Ok(Decision::new(label, probability))
}
