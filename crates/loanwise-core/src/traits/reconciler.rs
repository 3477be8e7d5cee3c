use crate::errors::ReconcileError;
use crate::models::{FeatureRow, FeatureSchema, MissingPolicy, RawInput};

/// Turns partial user input into a complete feature row.
pub trait IReconciler: Send + Sync {
    /// Build a row whose key set is exactly `schema`, applying `policy` to
    /// every column the input does not cover.
    fn reconcile(
        &self,
        raw: &RawInput,
        schema: &FeatureSchema,
        policy: MissingPolicy,
    ) -> Result<FeatureRow, ReconcileError>;
}
