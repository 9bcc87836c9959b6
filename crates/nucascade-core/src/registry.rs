//! Flat key/value configuration registry.
//!
//! Algorithm configurations are read from an ordered map of string keys
//! to scalar values. A registry is usually deserialized from a JSON object:
//!
//! ```
//! use nucascade_core::Registry;
//!
//! let reg = Registry::from_json_str(r#"{
//!     "CascadeReweight-Default-Weight": 1.0,
//!     "INCL-tflag": "-tC12"
//! }"#).unwrap();
//! assert_eq!(reg.get_real("CascadeReweight-Default-Weight").unwrap(), 1.0);
//! assert_eq!(reg.get_text_or("INCL-pflag", "-pp").unwrap(), "-pp");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A scalar configuration value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Real(f64),
    /// Free text.
    Text(String),
}

impl From<bool> for RegistryValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for RegistryValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for RegistryValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for RegistryValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for RegistryValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for RegistryValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Ordered configuration registry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: IndexMap<String, RegistryValue>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from a JSON object of scalar values.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RegistryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or overwrite a key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<RegistryValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Whether `key` is present.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&RegistryValue> {
        self.entries.get(key)
    }

    /// Read a real number; integers are widened.
    pub fn get_real(&self, key: &str) -> Result<f64, RegistryError> {
        match self.entries.get(key) {
            Some(RegistryValue::Real(v)) => Ok(*v),
            Some(RegistryValue::Int(v)) => Ok(*v as f64),
            Some(_) => Err(RegistryError::WrongType {
                key: key.to_string(),
                expected: "number",
            }),
            None => Err(RegistryError::Missing(key.to_string())),
        }
    }

    /// Read a text value, falling back to `default` when absent.
    pub fn get_text_or(&self, key: &str, default: &str) -> Result<String, RegistryError> {
        match self.entries.get(key) {
            Some(RegistryValue::Text(v)) => Ok(v.clone()),
            Some(_) => Err(RegistryError::WrongType {
                key: key.to_string(),
                expected: "string",
            }),
            None => Ok(default.to_string()),
        }
    }

    /// Keys starting with `prefix`, in insertion order.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(move |k| k.starts_with(prefix))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_keep_their_types() {
        let reg = Registry::from_json_str(
            r#"{"a": 1, "b": 0.25, "c": "text", "d": true}"#,
        )
        .unwrap();
        assert_eq!(reg.get("a"), Some(&RegistryValue::Int(1)));
        assert_eq!(reg.get("b"), Some(&RegistryValue::Real(0.25)));
        assert_eq!(reg.get_real("a").unwrap(), 1.0);
        assert_eq!(reg.get_text_or("c", "x").unwrap(), "text");
        assert_eq!(reg.get("d"), Some(&RegistryValue::Bool(true)));
    }

    #[test]
    fn missing_and_mistyped_keys() {
        let reg = Registry::new().with("w", "not a number");
        assert!(matches!(reg.get_real("w"), Err(RegistryError::WrongType { .. })));
        assert!(matches!(reg.get_real("nope"), Err(RegistryError::Missing(_))));
        assert!(matches!(reg.get_text_or("w", "d"), Ok(s) if s == "not a number"));
    }

    #[test]
    fn prefix_search_preserves_order() {
        let reg = Registry::new()
            .with("W-Abs@Pdg=2212", 1.0)
            .with("Other", 2.0)
            .with("W-Abs@Pdg=211", 3.0);
        let keys: Vec<_> = reg.keys_with_prefix("W-Abs@Pdg=").collect();
        assert_eq!(keys, ["W-Abs@Pdg=2212", "W-Abs@Pdg=211"]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(
            Registry::from_json_str("[1, 2"),
            Err(RegistryError::Json(_))
        ));
    }
}
