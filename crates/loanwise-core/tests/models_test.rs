use loanwise_core::errors::ReconcileError;
use loanwise_core::models::*;

fn schema(names: &[&str]) -> FeatureSchema {
    FeatureSchema::new(names.iter().copied()).unwrap()
}

// ── FeatureSchema ─────────────────────────────────────────────────────────

#[test]
fn schema_preserves_declared_order() {
    let s = schema(&["LoanAmount", "ApplicantIncome", "Credit_Score"]);
    assert_eq!(s.names(), &["LoanAmount", "ApplicantIncome", "Credit_Score"]);
    assert_eq!(s.position("Credit_Score"), Some(2));
    assert!(!s.contains("Gender"));
}

#[test]
fn schema_rejects_duplicates_and_blanks() {
    let err = FeatureSchema::new(["Gender", "Married", "Gender", " "]).unwrap_err();
    match err {
        ReconcileError::SchemaMismatch { missing, extra } => {
            assert!(missing.is_empty());
            assert_eq!(extra, vec!["Gender".to_string(), " ".to_string()]);
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn schema_deserializes_from_name_list() {
    let s: FeatureSchema = serde_json::from_str(r#"["A", "B"]"#).unwrap();
    assert_eq!(s.len(), 2);
    assert!(serde_json::from_str::<FeatureSchema>(r#"["A", "A"]"#).is_err());
}

// ── RawInput / RawValue ───────────────────────────────────────────────────

#[test]
fn raw_value_parse_prefers_integer_then_float() {
    assert_eq!(RawValue::parse("5000"), RawValue::Integer(5000));
    assert_eq!(RawValue::parse("0.25"), RawValue::Float(0.25));
    assert_eq!(RawValue::parse("Good"), RawValue::Text("Good".into()));
    assert_eq!(RawValue::parse("3+"), RawValue::Text("3+".into()));
}

#[test]
fn raw_input_reads_untagged_json() {
    let raw: RawInput =
        serde_json::from_str(r#"{"Gender": "Male", "ApplicantIncome": 5000, "Ratio": 0.5}"#)
            .unwrap();
    assert_eq!(raw.get("Gender"), Some(&RawValue::Text("Male".into())));
    assert_eq!(raw.get("ApplicantIncome"), Some(&RawValue::Integer(5000)));
    assert_eq!(raw.get("Ratio"), Some(&RawValue::Float(0.5)));
}

#[test]
fn raw_input_reads_toml_table() {
    let raw: RawInput = toml::from_str(
        r#"
Gender = "Female"
LoanAmount = 120000
"#,
    )
    .unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.get("LoanAmount"), Some(&RawValue::Integer(120000)));
}

#[test]
fn raw_input_extend_overrides() {
    let mut base = RawInput::new().with("Gender", "Male").with("Married", "No");
    base.extend(RawInput::new().with("Married", "Yes"));
    assert_eq!(base.get("Married"), Some(&RawValue::Text("Yes".into())));
    assert_eq!(base.len(), 2);
}

// ── FeatureRow ────────────────────────────────────────────────────────────

#[test]
fn row_from_values_requires_exact_length() {
    let s = schema(&["A", "B", "C"]);
    let err = FeatureRow::from_values(&s, vec![1.0]).unwrap_err();
    assert_eq!(
        err,
        ReconcileError::SchemaMismatch {
            missing: vec!["B".into(), "C".into()],
            extra: vec![],
        }
    );
    assert!(FeatureRow::from_values(&s, vec![1.0, 2.0, 3.0, 4.0]).is_err());
}

#[test]
fn row_rejects_non_finite_values() {
    let s = schema(&["A", "B"]);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = FeatureRow::from_values(&s, vec![1.0, bad]).unwrap_err();
        assert!(
            matches!(err, ReconcileError::InvalidEncoding { ref field, .. } if field == "B"),
            "got {err:?}"
        );
    }
}

#[test]
fn row_from_pairs_reports_missing_and_extra() {
    let s = schema(&["A", "B"]);
    let err = FeatureRow::from_pairs(&s, vec![("A", 1.0), ("Z", 2.0)]).unwrap_err();
    assert_eq!(
        err,
        ReconcileError::SchemaMismatch {
            missing: vec!["B".into()],
            extra: vec!["Z".into()],
        }
    );
}

#[test]
fn row_aligned_to_reorders_by_name() {
    let s1 = schema(&["A", "B"]);
    let s2 = schema(&["B", "A"]);
    let row = FeatureRow::from_values(&s1, vec![1.0, 2.0]).unwrap();
    let aligned = row.aligned_to(&s2).unwrap();
    assert_eq!(aligned.values(), &[2.0, 1.0]);
    assert!(aligned.matches(&s2));
    assert_eq!(aligned.get("A"), Some(1.0));
}

#[test]
fn row_aligned_to_rejects_different_key_sets() {
    let row = FeatureRow::from_values(&schema(&["A", "B"]), vec![1.0, 2.0]).unwrap();
    let err = row.aligned_to(&schema(&["A", "C"])).unwrap_err();
    assert_eq!(
        err,
        ReconcileError::SchemaMismatch {
            missing: vec!["C".into()],
            extra: vec!["B".into()],
        }
    );
}

#[test]
fn row_serializes_as_ordered_map() {
    let row = FeatureRow::from_values(&schema(&["Z", "A"]), vec![1.0, 0.0]).unwrap();
    assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"Z":1.0,"A":0.0}"#);
}

// ── Decision / Confidence / MissingPolicy ─────────────────────────────────

#[test]
fn decision_label_maps_binary_classes_only() {
    assert_eq!(DecisionLabel::from_class(1), Some(DecisionLabel::Approved));
    assert_eq!(DecisionLabel::from_class(0), Some(DecisionLabel::Rejected));
    assert_eq!(DecisionLabel::from_class(2), None);
}

#[test]
fn confidence_checked_rejects_out_of_range() {
    assert!(Confidence::checked(0.7).is_some());
    assert!(Confidence::checked(1.2).is_none());
    assert!(Confidence::checked(-0.1).is_none());
    assert!(Confidence::checked(f64::NAN).is_none());
    assert_eq!(Confidence::new(1.5).value(), 1.0);
    assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
}

#[test]
fn decision_renders_percentage() {
    let d = Decision::new(DecisionLabel::Approved, Confidence::new(0.875));
    assert!(d.is_approved());
    assert!((d.confidence_percent() - 87.5).abs() < 1e-9);
    assert_eq!(d.to_string(), "Loan Approved (approval confidence 87.5%)");
}

#[test]
fn missing_policy_parses_and_serializes() {
    assert_eq!("zero_fill".parse::<MissingPolicy>(), Ok(MissingPolicy::ZeroFill));
    assert_eq!(
        "Reject-Incomplete".parse::<MissingPolicy>(),
        Ok(MissingPolicy::RejectIncomplete)
    );
    assert!("nan_fill".parse::<MissingPolicy>().is_err());
    assert_eq!(MissingPolicy::default(), MissingPolicy::RejectIncomplete);
    assert_eq!(
        serde_json::to_string(&MissingPolicy::ZeroFill).unwrap(),
        r#""zero_fill""#
    );
}
