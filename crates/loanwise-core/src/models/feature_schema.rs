use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ReconcileError;

/// Ordered, duplicate-free feature names an inference artifact was fit against.
///
/// Immutable once built. Deserializes from a plain list of names and rejects
/// blank or repeated entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema from names in artifact order.
    ///
    /// # Errors
    /// Returns `ReconcileError::SchemaMismatch` listing blank or duplicated
    /// names as `extra`.
    pub fn new<I, S>(names: I) -> Result<Self, ReconcileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(names.len());
        let mut rejected = Vec::new();
        for name in &names {
            if name.trim().is_empty() || !seen.insert(name.as_str()) {
                rejected.push(name.clone());
            }
        }
        if !rejected.is_empty() {
            return Err(ReconcileError::extra(rejected));
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Column index of `name`, if declared.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = ReconcileError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.names
    }
}
