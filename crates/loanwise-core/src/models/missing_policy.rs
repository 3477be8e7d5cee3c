use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with a schema column the raw input does not cover.
///
/// No variant leaves a column undefined: every successful reconciliation
/// produces finite numbers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Fill uncovered columns with `0.0`.
    ZeroFill,
    /// Fail the whole reconciliation, naming every uncovered column.
    #[default]
    RejectIncomplete,
}

impl MissingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZeroFill => "zero_fill",
            Self::RejectIncomplete => "reject_incomplete",
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "zero_fill" | "zerofill" => Ok(Self::ZeroFill),
            "reject_incomplete" | "rejectincomplete" => Ok(Self::RejectIncomplete),
            other => Err(format!(
                "unknown missing policy '{other}' (expected zero_fill or reject_incomplete)"
            )),
        }
    }
}
