use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NEGATIVE_CLASS, POSITIVE_CLASS};

/// Binary outcome of a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionLabel {
    Approved,
    Rejected,
}

impl DecisionLabel {
    /// Map a classifier class index onto a label. Anything but 0 or 1 is `None`.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            POSITIVE_CLASS => Some(Self::Approved),
            NEGATIVE_CLASS => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for DecisionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => f.write_str("Loan Approved"),
            Self::Rejected => f.write_str("Loan Rejected"),
        }
    }
}

/// Probability of the positive (approved) class, clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Accept `value` only if it already is a probability.
    pub fn checked(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

/// Result of one inference call. Produced per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub label: DecisionLabel,
    /// Positive-class probability.
    pub probability: Confidence,
}

impl Decision {
    pub fn new(label: DecisionLabel, probability: Confidence) -> Self {
        Self { label, probability }
    }

    pub fn is_approved(&self) -> bool {
        self.label == DecisionLabel::Approved
    }

    /// Positive-class probability as a percentage, for display.
    pub fn confidence_percent(&self) -> f64 {
        self.probability.percent()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (approval confidence {})", self.label, self.probability)
    }
}
