//! Static mapping from categorical labels to numeric codes.

use loanwise_core::errors::ReconcileError;
use loanwise_core::models::RawValue;

use crate::coerce;

/// How a single field turns a raw value into a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEncoding {
    /// Closed vocabulary of `(label, code)` pairs.
    Categorical(&'static [(&'static str, f64)]),
    /// Any finite number, passed through unchanged.
    Numeric,
    /// Numeric count whose top bucket may arrive as a label such as "3+".
    CappedCount { cap_label: &'static str, cap: f64 },
}

/// One entry of an encoding table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub encoding: FieldEncoding,
}

impl FieldSpec {
    pub const fn new(name: &'static str, encoding: FieldEncoding) -> Self {
        Self { name, encoding }
    }

    pub const fn categorical(name: &'static str, vocab: &'static [(&'static str, f64)]) -> Self {
        Self::new(name, FieldEncoding::Categorical(vocab))
    }

    pub const fn numeric(name: &'static str) -> Self {
        Self::new(name, FieldEncoding::Numeric)
    }
}

const GENDER: &[(&str, f64)] = &[("Male", 1.0), ("Female", 0.0)];
const MARRIED: &[(&str, f64)] = &[
    ("Married", 1.0),
    ("Yes", 1.0),
    ("Single", 0.0),
    ("No", 0.0),
];
const EDUCATION: &[(&str, f64)] = &[("Graduate", 1.0), ("Not Graduate", 0.0)];
const YES_NO: &[(&str, f64)] = &[("Yes", 1.0), ("No", 0.0)];
const CREDIT_HISTORY: &[(&str, f64)] = &[("Good", 1.0), ("Bad", 0.0)];
const DEPENDENTS: FieldEncoding = FieldEncoding::CappedCount {
    cap_label: "3+",
    cap: 3.0,
};

/// Fields of the loan-approval application form.
pub const LOAN_APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::categorical("Gender", GENDER),
    FieldSpec::categorical("Married", MARRIED),
    FieldSpec::new("Dependents", DEPENDENTS),
    FieldSpec::categorical("Education", EDUCATION),
    FieldSpec::categorical("Self_Employed", YES_NO),
    FieldSpec::numeric("ApplicantIncome"),
    FieldSpec::numeric("CoapplicantIncome"),
    FieldSpec::numeric("LoanAmount"),
    FieldSpec::numeric("Loan_Amount_Term"),
    FieldSpec::categorical("Credit_History", CREDIT_HISTORY),
];

/// Lookup table from schema feature name to its encoding.
#[derive(Debug, Clone, Copy)]
pub struct EncodingTable {
    fields: &'static [FieldSpec],
}

impl EncodingTable {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// The loan-application table.
    pub const fn loan_application() -> Self {
        Self::new(LOAN_APPLICATION_FIELDS)
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn encoding_for(&self, name: &str) -> Option<FieldEncoding> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.encoding)
    }

    /// Accepted labels for a categorical field, in table order.
    pub fn vocabulary(&self, name: &str) -> Option<Vec<&'static str>> {
        match self.encoding_for(name)? {
            FieldEncoding::Categorical(vocab) => {
                Some(vocab.iter().map(|(label, _)| *label).collect())
            }
            _ => None,
        }
    }

    /// Encode `value` for the schema column `name`.
    ///
    /// Columns absent from the table are treated as numeric.
    pub fn encode(&self, name: &str, value: &RawValue) -> Result<f64, ReconcileError> {
        match self.encoding_for(name).unwrap_or(FieldEncoding::Numeric) {
            FieldEncoding::Categorical(vocab) => encode_categorical(name, vocab, value),
            FieldEncoding::Numeric => coerce::to_finite(name, value),
            FieldEncoding::CappedCount { cap_label, cap } => match value {
                RawValue::Text(s) if s.trim() == cap_label => Ok(cap),
                other => coerce::to_finite(name, other),
            },
        }
    }
}

impl Default for EncodingTable {
    fn default() -> Self {
        Self::loan_application()
    }
}

/// Labels match trimmed and ASCII case-insensitively. Numbers are accepted
/// only when they already equal one of the vocabulary's codes.
fn encode_categorical(
    name: &str,
    vocab: &'static [(&'static str, f64)],
    value: &RawValue,
) -> Result<f64, ReconcileError> {
    let code = match value {
        RawValue::Text(s) => {
            let s = s.trim();
            vocab
                .iter()
                .find(|(label, _)| label.eq_ignore_ascii_case(s))
                .map(|(_, code)| *code)
        }
        RawValue::Integer(i) => {
            let x = *i as f64;
            vocab.iter().any(|(_, code)| *code == x).then_some(x)
        }
        RawValue::Float(x) => vocab.iter().any(|(_, code)| code == x).then_some(*x),
    };

    code.ok_or_else(|| ReconcileError::InvalidEncoding {
        field: name.to_string(),
        value: value.to_string(),
        expected: format!(
            "one of {}",
            vocab
                .iter()
                .map(|(label, _)| format!("{label:?}"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}
