//! Translator configuration bag.
//!
//! Options are string-keyed JSON values passed through to the base
//! translator being built. The dispatcher is agnostic to their meaning;
//! recognized keys and effects belong to the concrete translator. Typed
//! accessors fail only on a value of the wrong type, never on absence.

use crate::error::{TranslateError, TranslateResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// String-keyed configuration options for translator construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TranslatorArgs(HashMap<String, Value>);

impl TranslatorArgs {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of options in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag holds no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String value for a key.
    pub fn get_str(&self, key: &str) -> TranslateResult<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(Self::mismatch(key, "string", other)),
        }
    }

    /// Float value for a key.
    pub fn get_f64(&self, key: &str) -> TranslateResult<Option<f64>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| Self::mismatch(key, "number", value)),
        }
    }

    /// Boolean value for a key.
    pub fn get_bool(&self, key: &str) -> TranslateResult<Option<bool>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| Self::mismatch(key, "boolean", value)),
        }
    }

    /// Unsigned integer value for a key.
    pub fn get_usize(&self, key: &str) -> TranslateResult<Option<usize>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .map(|v| Some(v as usize))
                .ok_or_else(|| Self::mismatch(key, "unsigned integer", value)),
        }
    }

    fn mismatch(key: &str, expected: &str, found: &Value) -> TranslateError {
        TranslateError::InvalidArgument {
            key: key.to_string(),
            reason: format!("expected {}, found {}", expected, found),
        }
    }
}
