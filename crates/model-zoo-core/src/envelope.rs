//! Serving envelopes.
//!
//! Request/response envelopes are the generic wire shape a serving frontend
//! hands to a translator: string-keyed properties plus an opaque body. The
//! dispatcher's serving adapter unpacks and packs them; it never interprets
//! property semantics beyond the content type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A serving request: properties plus an opaque body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestEnvelope {
    /// String-keyed request properties (headers, batching metadata)
    properties: HashMap<String, String>,
    /// Request body bytes
    body: Vec<u8>,
}

impl RequestEnvelope {
    /// Creates a request envelope around a body.
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            properties: HashMap::new(),
            body,
        }
    }

    /// Adds a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Looks up a property by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All properties.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A serving response: status code, properties, and an opaque body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Status code, HTTP-convention
    code: u16,
    /// String-keyed response properties
    properties: HashMap<String, String>,
    /// Response body bytes
    body: Vec<u8>,
}

impl ResponseEnvelope {
    /// Creates a successful response around a body.
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            code: 200,
            properties: HashMap::new(),
            body,
        }
    }

    /// Adds a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Looks up a property by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_properties() {
        let request = RequestEnvelope::new(b"payload".to_vec())
            .with_property("content-type", "image/jpeg")
            .with_property("batch-size", "4");

        assert_eq!(request.property("content-type"), Some("image/jpeg"));
        assert_eq!(request.property("batch-size"), Some("4"));
        assert_eq!(request.property("missing"), None);
        assert_eq!(request.body(), b"payload");
    }

    #[test]
    fn test_response_defaults() {
        let response = ResponseEnvelope::ok(vec![1, 2]);
        assert_eq!(response.code(), 200);
        assert_eq!(response.body(), &[1, 2]);
    }

    #[test]
    fn test_envelope_roundtrip() {
        let request = RequestEnvelope::new(vec![7]).with_property("content-type", "image/png");
        let json = serde_json::to_string(&request).unwrap();
        let parsed: RequestEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
