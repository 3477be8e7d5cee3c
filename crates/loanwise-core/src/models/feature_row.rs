use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::FeatureSchema;
use crate::errors::ReconcileError;

/// One complete, finite, schema-ordered feature row.
///
/// The key set always equals the schema the row was built against. Rows can
/// be consumed by name (`get`, `iter`) or positionally (`values`, `to_f32_vec`).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRow {
    /// Build a row from values given in schema order.
    ///
    /// # Errors
    /// - `SchemaMismatch` when the value count differs from the schema length.
    /// - `InvalidEncoding` when a value is NaN or infinite.
    pub fn from_values(schema: &FeatureSchema, values: Vec<f64>) -> Result<Self, ReconcileError> {
        if values.len() < schema.len() {
            return Err(ReconcileError::missing(
                schema.names()[values.len()..].to_vec(),
            ));
        }
        if values.len() > schema.len() {
            return Err(ReconcileError::extra(
                (schema.len()..values.len()).map(|i| format!("#{i}")).collect(),
            ));
        }
        for (name, value) in schema.iter().zip(&values) {
            ensure_finite(name, *value)?;
        }
        Ok(Self {
            names: schema.names().to_vec(),
            values,
        })
    }

    /// Build a row from `(name, value)` pairs in any order.
    ///
    /// # Errors
    /// `SchemaMismatch` listing every undeclared or uncovered name, or
    /// `InvalidEncoding` for a non-finite value.
    pub fn from_pairs<I, S>(schema: &FeatureSchema, pairs: I) -> Result<Self, ReconcileError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut by_name: HashMap<String, f64> = HashMap::new();
        let mut extra = Vec::new();
        for (name, value) in pairs {
            let name = name.into();
            if schema.contains(&name) && !by_name.contains_key(&name) {
                by_name.insert(name, value);
            } else {
                extra.push(name);
            }
        }

        let missing: Vec<String> = schema
            .iter()
            .filter(|n| !by_name.contains_key(*n))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() || !extra.is_empty() {
            return Err(ReconcileError::SchemaMismatch { missing, extra });
        }

        let values = schema.iter().map(|n| by_name[n]).collect();
        Self::from_values(schema, values)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Positional layout narrowed to `f32`, for tensor-based runtimes.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.values.iter().map(|&v| v as f32).collect()
    }

    /// Whether this row was built against exactly `schema` (same names, same order).
    pub fn matches(&self, schema: &FeatureSchema) -> bool {
        self.names.as_slice() == schema.names()
    }

    /// Re-key this row onto `schema`, reordering columns by name.
    ///
    /// # Errors
    /// `SchemaMismatch` when the key sets differ in either direction.
    pub fn aligned_to(&self, schema: &FeatureSchema) -> Result<Self, ReconcileError> {
        if self.matches(schema) {
            return Ok(self.clone());
        }
        Self::from_pairs(schema, self.iter().map(|(n, v)| (n.to_string(), v)))
    }
}

impl Serialize for FeatureRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), ReconcileError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ReconcileError::InvalidEncoding {
            field: name.to_string(),
            value: value.to_string(),
            expected: "a finite number".to_string(),
        })
    }
}
