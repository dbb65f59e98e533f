//! Frontmatter (YAML header) wrapper

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Parsed frontmatter of a note.
///
/// A thin wrapper over the YAML mapping with typed accessors for the keys
/// the bake engine cares about (share flags, title fields). The engine never
/// assumes a schema; keys are looked up by the names configured in
/// [`crate::config::Settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    /// Wrap a YAML mapping
    pub fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Raw value lookup by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(Value::String(key.to_string()))
    }

    /// Boolean value lookup; `None` when absent or not a bool
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// String value lookup; `None` when absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether the mapping has no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
