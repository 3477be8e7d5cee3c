use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Supported artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// JSON logistic-regression pipeline (optional standard scaler).
    Logistic,
    /// ONNX classifier executed through ONNX Runtime.
    Onnx,
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistic" => Ok(Self::Logistic),
            "onnx" => Ok(Self::Onnx),
            other => Err(format!("unknown artifact kind '{other}' (expected logistic or onnx)")),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logistic => f.write_str("logistic"),
            Self::Onnx => f.write_str("onnx"),
        }
    }
}

/// Inference artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Artifact format: "logistic" or "onnx".
    pub kind: String,
    /// Path to the artifact file.
    pub path: Option<String>,
    /// Column order for artifacts that do not carry their own feature names (ONNX).
    pub feature_names: Vec<String>,
    /// ONNX Runtime intra-op threads.
    pub intra_threads: usize,
}

impl ArtifactConfig {
    /// Parsed `kind`.
    pub fn artifact_kind(&self) -> Result<ArtifactKind, String> {
        self.kind.parse()
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            kind: defaults::DEFAULT_ARTIFACT_KIND.to_string(),
            path: None,
            feature_names: Vec::new(),
            intra_threads: defaults::DEFAULT_ONNX_INTRA_THREADS,
        }
    }
}
