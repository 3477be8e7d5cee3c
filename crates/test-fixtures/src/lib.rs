//! Shared fixtures for Loanwise tests: canonical applicant inputs, schemas,
//! stub inference services, and the JSON artifact files under `fixtures/`.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use loanwise_core::errors::InferenceError;
use loanwise_core::models::{FeatureRow, FeatureSchema, RawInput};
use loanwise_core::traits::IInferenceService;
use serde::de::DeserializeOwned;

/// The ten columns of the loan-approval form, in form order.
pub const LOAN_FEATURES: [&str; 10] = [
    "Gender",
    "Married",
    "Dependents",
    "Education",
    "Self_Employed",
    "ApplicantIncome",
    "CoapplicantIncome",
    "LoanAmount",
    "Loan_Amount_Term",
    "Credit_History",
];

/// Columns of the four-input form (loan amount, income, credit score, term).
pub const COMPACT_FEATURES: [&str; 4] = [
    "LoanAmount",
    "ApplicantIncome",
    "Credit_Score",
    "Loan_Amount_Term",
];

pub fn loan_schema() -> FeatureSchema {
    FeatureSchema::new(LOAN_FEATURES).expect("static schema is valid")
}

/// The loan schema plus `Property_Area`, which the form never collects.
pub fn extended_loan_schema() -> FeatureSchema {
    FeatureSchema::new(LOAN_FEATURES.iter().copied().chain(["Property_Area"]))
        .expect("static schema is valid")
}

pub fn compact_schema() -> FeatureSchema {
    FeatureSchema::new(COMPACT_FEATURES).expect("static schema is valid")
}

/// A married male graduate with good credit history.
pub fn approved_applicant() -> RawInput {
    RawInput::new()
        .with("Gender", "Male")
        .with("Married", "Married")
        .with("Dependents", 1)
        .with("Education", "Graduate")
        .with("Self_Employed", "No")
        .with("ApplicantIncome", 5000)
        .with("CoapplicantIncome", 0)
        .with("LoanAmount", 100000)
        .with("Loan_Amount_Term", 360)
        .with("Credit_History", "Good")
}

/// Expected encoding of `approved_applicant()` against `loan_schema()`.
pub fn approved_applicant_row() -> Vec<(&'static str, f64)> {
    vec![
        ("Gender", 1.0),
        ("Married", 1.0),
        ("Dependents", 1.0),
        ("Education", 1.0),
        ("Self_Employed", 0.0),
        ("ApplicantIncome", 5000.0),
        ("CoapplicantIncome", 0.0),
        ("LoanAmount", 100000.0),
        ("Loan_Amount_Term", 360.0),
        ("Credit_History", 1.0),
    ]
}

// ── Stub inference services ───────────────────────────────────────────────

/// Inference stub returning a fixed positive-class probability.
///
/// Counts calls so tests can assert the service was (or was not) reached.
pub struct StubInferenceService {
    schema: FeatureSchema,
    probability: f64,
    label: Option<u8>,
    calls: AtomicUsize,
}

impl StubInferenceService {
    pub fn new(schema: FeatureSchema, probability: f64) -> Self {
        Self {
            schema,
            probability,
            label: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Force the predicted label regardless of the probability.
    pub fn with_label(mut self, label: u8) -> Self {
        self.label = Some(label);
        self
    }

    /// Number of `predict` + `predict_proba` calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, batch: &[FeatureRow]) -> Result<(), InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match batch.iter().find(|row| !row.matches(&self.schema)) {
            Some(row) => Err(InferenceError::Rejected {
                reason: format!("unexpected columns {:?}", row.names()),
            }),
            None => Ok(()),
        }
    }
}

impl IInferenceService for StubInferenceService {
    fn feature_names(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict(&self, batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceError> {
        self.check(batch)?;
        let label = self
            .label
            .unwrap_or(if self.probability >= 0.5 { 1 } else { 0 });
        Ok(vec![label; batch.len()])
    }

    fn predict_proba(&self, batch: &[FeatureRow]) -> Result<Vec<[f64; 2]>, InferenceError> {
        self.check(batch)?;
        Ok(vec![[1.0 - self.probability, self.probability]; batch.len()])
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Inference stub that rejects every batch.
pub struct FailingInferenceService {
    schema: FeatureSchema,
}

impl FailingInferenceService {
    pub fn new(schema: FeatureSchema) -> Self {
        Self { schema }
    }
}

impl IInferenceService for FailingInferenceService {
    fn feature_names(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict(&self, _batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceError> {
        Err(InferenceError::Rejected {
            reason: "artifact refused input".to_string(),
        })
    }

    fn predict_proba(&self, _batch: &[FeatureRow]) -> Result<Vec<[f64; 2]>, InferenceError> {
        Err(InferenceError::Rejected {
            reason: "artifact refused input".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

// ── Fixture files ─────────────────────────────────────────────────────────

/// Root directory of this crate's `fixtures/` folder.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
