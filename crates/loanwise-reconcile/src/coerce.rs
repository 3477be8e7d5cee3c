//! Numeric coercion for passthrough fields.

use loanwise_core::errors::ReconcileError;
use loanwise_core::models::RawValue;

/// Coerce `value` to a finite `f64`. Text must parse as a number.
pub fn to_finite(name: &str, value: &RawValue) -> Result<f64, ReconcileError> {
    let parsed = match value {
        RawValue::Integer(i) => Some(*i as f64),
        RawValue::Float(x) => Some(*x),
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
    };

    match parsed {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(ReconcileError::InvalidEncoding {
            field: name.to_string(),
            value: value.to_string(),
            expected: "a finite number".to_string(),
        }),
    }
}
