use loanwise_core::errors::ReconcileError;
use loanwise_core::models::{FeatureSchema, MissingPolicy, RawInput, RawValue};
use loanwise_reconcile::reconcile;
use proptest::prelude::*;
use test_fixtures::{approved_applicant, LOAN_FEATURES};

/// Schemas mixing known form columns with arbitrary extra column names.
fn schema_strategy() -> impl Strategy<Value = FeatureSchema> {
    (
        proptest::sample::subsequence(LOAN_FEATURES.to_vec(), 0..=LOAN_FEATURES.len()),
        proptest::collection::btree_set("Extra_[A-Z][a-z]{2,8}", 0..4),
    )
        .prop_map(|(known, extra)| {
            let names: Vec<String> = known
                .into_iter()
                .map(str::to_string)
                .chain(extra)
                .collect();
            FeatureSchema::new(names).unwrap()
        })
}

fn policy_strategy() -> impl Strategy<Value = MissingPolicy> {
    prop_oneof![Just(MissingPolicy::ZeroFill), Just(MissingPolicy::RejectIncomplete)]
}

// ── Output key set equals schema exactly ──────────────────────────────────

proptest! {
    #[test]
    fn zero_fill_row_keys_equal_schema(schema in schema_strategy()) {
        let row = reconcile(&approved_applicant(), &schema, MissingPolicy::ZeroFill).unwrap();
        prop_assert_eq!(row.names(), schema.names());
        prop_assert!(row.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn reject_incomplete_is_all_or_nothing(schema in schema_strategy()) {
        let uncovered: Vec<String> = schema
            .iter()
            .filter(|n| !LOAN_FEATURES.contains(n))
            .map(str::to_string)
            .collect();

        match reconcile(&approved_applicant(), &schema, MissingPolicy::RejectIncomplete) {
            Ok(row) => {
                prop_assert!(uncovered.is_empty());
                prop_assert_eq!(row.names(), schema.names());
            }
            Err(ReconcileError::SchemaMismatch { missing, extra }) => {
                prop_assert_eq!(missing, uncovered);
                prop_assert!(extra.is_empty());
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    #[test]
    fn zero_fill_uses_zero_for_uncovered_columns(schema in schema_strategy()) {
        let row = reconcile(&approved_applicant(), &schema, MissingPolicy::ZeroFill).unwrap();
        for (name, value) in row.iter() {
            if !LOAN_FEATURES.contains(&name) {
                prop_assert_eq!(value, 0.0);
            }
        }
    }
}

// ── Idempotence ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reconcile_is_idempotent(
        schema in schema_strategy(),
        policy in policy_strategy(),
        income in 0i64..1_000_000,
        amount in 0.0f64..1e7,
    ) {
        let raw = approved_applicant()
            .with("ApplicantIncome", income)
            .with("LoanAmount", amount);
        let first = reconcile(&raw, &schema, policy);
        let second = reconcile(&raw, &schema, policy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn numeric_passthrough_is_exact(value in -1e9f64..1e9) {
        let schema = FeatureSchema::new(["LoanAmount"]).unwrap();
        let raw = RawInput::new().with("LoanAmount", RawValue::Float(value));
        let row = reconcile(&raw, &schema, MissingPolicy::RejectIncomplete).unwrap();
        prop_assert_eq!(row.get("LoanAmount"), Some(value));
    }

    #[test]
    fn unknown_credit_history_labels_never_encode(label in "[A-Za-z]{1,12}") {
        prop_assume!(!label.eq_ignore_ascii_case("good") && !label.eq_ignore_ascii_case("bad"));
        let raw = approved_applicant().with("Credit_History", label.as_str());
        let schema = FeatureSchema::new(["Credit_History"]).unwrap();
        let is_invalid_encoding = matches!(
            reconcile(&raw, &schema, MissingPolicy::ZeroFill),
            Err(ReconcileError::InvalidEncoding { .. })
        );
        prop_assert!(is_invalid_encoding);
    }
}
