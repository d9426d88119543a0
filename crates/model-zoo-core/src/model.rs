//! Opaque model handle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The model a translator is built against.
///
/// Opaque to the dispatcher: it is passed through to the base-translator
/// builder untouched. Properties carry whatever identity the resolving layer
/// attaches (group id, version, artifact locator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle {
    /// Model name
    name: String,
    /// String-keyed model properties
    properties: HashMap<String, String>,
}

impl ModelHandle {
    /// Creates a handle with the given name and no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Adds a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a property by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All properties.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}
