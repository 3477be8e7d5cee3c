//! Presentation: decisions, rows, schemas, and errors as terminal text.

use std::fmt::Write;

use loanwise_core::errors::{LoanwiseError, LoanwiseErrorCode};
use loanwise_core::models::{Decision, FeatureSchema};
use loanwise_reconcile::{FieldEncoding, Reconciler};
use serde::Serialize;

#[derive(Serialize)]
struct DecisionView {
    label: loanwise_core::models::DecisionLabel,
    approved: bool,
    probability: f64,
    confidence_percent: f64,
}

/// Two-line human summary of a decision.
pub fn decision_text(decision: &Decision) -> String {
    format!(
        "{}\nApproval confidence: {}",
        decision.label, decision.probability
    )
}

pub fn decision_json(decision: &Decision) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DecisionView {
        label: decision.label,
        approved: decision.is_approved(),
        probability: decision.probability.value(),
        confidence_percent: decision.confidence_percent(),
    })
}

/// One line per feature: position, name, encoding, accepted labels.
pub fn schema_text(schema: &FeatureSchema, reconciler: &Reconciler) -> String {
    let mut out = String::new();
    for (i, name) in schema.iter().enumerate() {
        let encoding = match reconciler.encodings().encoding_for(name) {
            Some(FieldEncoding::Categorical(vocab)) => format!(
                "categorical [{}]",
                vocab
                    .iter()
                    .map(|(label, code)| format!("{label}={code}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Some(FieldEncoding::Numeric) => "numeric".to_string(),
            Some(FieldEncoding::CappedCount { cap_label, cap }) => {
                format!("numeric ({cap_label}={cap})")
            }
            None => "numeric, not collected by the form".to_string(),
        };
        let labels: Vec<&str> = reconciler.aliases().labels_for(name).collect();
        let _ = write!(out, "{:>3}. {name:<20} {encoding}", i + 1);
        if !labels.is_empty() {
            let _ = write!(out, "  (also: {})", labels.join(", "));
        }
        out.push('\n');
    }
    out
}

/// User-facing error line.
pub fn error_text(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LoanwiseError>() {
        Some(e) => e.user_message(),
        None => format!("error: {err:#}"),
    }
}
