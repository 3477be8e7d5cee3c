//! Reconciler: resolves each schema column from raw input, encodes it, and
//! applies the missing-column policy.
//!
//! Implements `IReconciler` from loanwise-core.

use loanwise_core::errors::ReconcileError;
use loanwise_core::models::{FeatureRow, FeatureSchema, MissingPolicy, RawInput, RawValue};
use loanwise_core::traits::IReconciler;
use tracing::{debug, warn};

use crate::aliases::AliasTable;
use crate::encoding::EncodingTable;

/// Stateless reconciler over a fixed encoding table and alias table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    encodings: EncodingTable,
    aliases: AliasTable,
}

impl Reconciler {
    pub fn new(encodings: EncodingTable, aliases: AliasTable) -> Self {
        Self { encodings, aliases }
    }

    pub fn encodings(&self) -> &EncodingTable {
        &self.encodings
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Raw entries that supply schema column `feature`, highest priority first.
    ///
    /// An exact schema-name key comes before any display label; labels follow
    /// alias-table order.
    fn candidates<'r>(&self, raw: &'r RawInput, feature: &str) -> Vec<(&'r str, &'r RawValue)> {
        let exact = raw.iter().find(|(key, _)| *key == feature);
        let labelled = self
            .aliases
            .labels_for(feature)
            .filter_map(|label| raw.iter().find(|(key, _)| *key == label));
        exact.into_iter().chain(labelled).collect()
    }

    /// Raw keys that neither name a schema column nor alias one.
    fn unused_fields<'r>(&self, raw: &'r RawInput, schema: &FeatureSchema) -> Vec<&'r str> {
        raw.iter()
            .map(|(key, _)| key)
            .filter(|key| {
                !schema.contains(key)
                    && !self
                        .aliases
                        .feature_for(key)
                        .is_some_and(|feature| schema.contains(feature))
            })
            .collect()
    }
}

impl IReconciler for Reconciler {
    fn reconcile(
        &self,
        raw: &RawInput,
        schema: &FeatureSchema,
        policy: MissingPolicy,
    ) -> Result<FeatureRow, ReconcileError> {
        let _span = loanwise_core::reconcile_span!(schema.len(), policy).entered();

        let mut values = Vec::with_capacity(schema.len());
        let mut unresolved = Vec::new();

        for feature in schema.iter() {
            let candidates = self.candidates(raw, feature);
            match candidates.split_first() {
                Some((&(key, value), shadowed)) => {
                    if key != feature {
                        debug!(feature, label = key, "resolved feature through alias");
                    }
                    if !shadowed.is_empty() {
                        let ignored: Vec<&str> = shadowed.iter().map(|(label, _)| *label).collect();
                        warn!(
                            feature,
                            used = key,
                            ?ignored,
                            "several inputs for feature, using one"
                        );
                    }
                    values.push(self.encodings.encode(feature, value)?);
                }
                None => match policy {
                    MissingPolicy::ZeroFill => {
                        warn!(feature, "no input for feature, filling with 0");
                        values.push(0.0);
                    }
                    MissingPolicy::RejectIncomplete => unresolved.push(feature.to_string()),
                },
            }
        }

        if !unresolved.is_empty() {
            warn!(missing = ?unresolved, "rejecting incomplete input");
            return Err(ReconcileError::missing(unresolved));
        }

        let unused = self.unused_fields(raw, schema);
        if !unused.is_empty() {
            debug!(fields = ?unused, "ignoring input fields not in schema");
        }

        FeatureRow::from_values(schema, values)
    }
}

/// Reconcile with the loan-application tables.
pub fn reconcile(
    raw: &RawInput,
    schema: &FeatureSchema,
    policy: MissingPolicy,
) -> Result<FeatureRow, ReconcileError> {
    Reconciler::default().reconcile(raw, schema, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_outranks_every_label() {
        let raw = RawInput::new()
            .with("Income", 1)
            .with("ApplicantIncome", 5)
            .with("Applicant Income", 99999);
        let keys: Vec<&str> = Reconciler::default()
            .candidates(&raw, "ApplicantIncome")
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, ["ApplicantIncome", "Applicant Income", "Income"]);
    }

    #[test]
    fn competing_labels_follow_table_order() {
        let raw = RawInput::new().with("Income", 1).with("Applicant Income", 99999);
        let candidates = Reconciler::default().candidates(&raw, "ApplicantIncome");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].0, "Applicant Income");
        assert_eq!(candidates[1].0, "Income");
    }

    #[test]
    fn unsupplied_feature_has_no_candidates() {
        let raw = RawInput::new().with("Gender", "Male");
        assert!(Reconciler::default().candidates(&raw, "LoanAmount").is_empty());
    }
}
