//! Runtime payloads and the engine-ready tensor representation.

use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::kind::IoKind;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// A decoded domain object: canonical bytes plus an optional content type.
///
/// Concrete pixel/token decoding belongs to the concrete translator being
/// dispatched for; the serving layer carries the decoded form opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedValue {
    /// MIME type hint, when known
    content_type: Option<String>,
    /// Canonical decoded bytes
    data: Vec<u8>,
}

impl DecodedValue {
    /// Creates a decoded value without a content type.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            content_type: None,
            data,
        }
    }

    /// Attaches a content type hint.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Content type hint, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Decoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the value, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// A domain-level value flowing into or out of a translator, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Decoded domain object
    Decoded(DecodedValue),
    /// Path to a file on local disk
    File(PathBuf),
    /// Remote resource address
    Url(Url),
    /// Raw encoded bytes
    Stream(Vec<u8>),
    /// Serving request envelope
    Request(RequestEnvelope),
    /// Serving response envelope
    Response(ResponseEnvelope),
}

impl Payload {
    /// The kind tag of this payload.
    pub fn kind(&self) -> IoKind {
        match self {
            Payload::Decoded(_) => IoKind::Decoded,
            Payload::File(_) => IoKind::File,
            Payload::Url(_) => IoKind::Url,
            Payload::Stream(_) => IoKind::Stream,
            Payload::Request(_) => IoKind::Request,
            Payload::Response(_) => IoKind::Response,
        }
    }
}

/// The engine-ready representation: an ordered list of tensors.
///
/// The serving layer never interprets the numbers; it only moves the list
/// between translators and execution engines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TensorList(Vec<ArrayD<f32>>);

impl TensorList {
    /// Creates an empty tensor list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a tensor.
    pub fn push(&mut self, tensor: ArrayD<f32>) {
        self.0.push(tensor);
    }

    /// Number of tensors in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no tensors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The tensors, in order.
    pub fn tensors(&self) -> &[ArrayD<f32>] {
        &self.0
    }
}

impl From<Vec<ArrayD<f32>>> for TensorList {
    fn from(tensors: Vec<ArrayD<f32>>) -> Self {
        Self(tensors)
    }
}

impl FromIterator<ArrayD<f32>> for TensorList {
    fn from_iter<I: IntoIterator<Item = ArrayD<f32>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayD;

    #[test]
    fn test_payload_kind_tags() {
        let decoded = Payload::Decoded(DecodedValue::new(vec![1, 2, 3]));
        assert_eq!(decoded.kind(), IoKind::Decoded);

        let file = Payload::File(PathBuf::from("/tmp/input.png"));
        assert_eq!(file.kind(), IoKind::File);

        let url = Payload::Url(Url::parse("https://example.com/input.png").unwrap());
        assert_eq!(url.kind(), IoKind::Url);

        let stream = Payload::Stream(vec![0xff, 0xd8]);
        assert_eq!(stream.kind(), IoKind::Stream);
    }

    #[test]
    fn test_decoded_value_content_type() {
        let value = DecodedValue::new(vec![1]).with_content_type("image/png");
        assert_eq!(value.content_type(), Some("image/png"));
        assert_eq!(value.data(), &[1]);
    }

    #[test]
    fn test_tensor_list() {
        let mut list = TensorList::new();
        assert!(list.is_empty());

        list.push(ArrayD::zeros(vec![1, 3, 2, 2]));
        assert_eq!(list.len(), 1);
        assert_eq!(list.tensors()[0].shape(), &[1, 3, 2, 2]);
    }

    #[test]
    fn test_payload_serialization() {
        let payload = Payload::Decoded(DecodedValue::new(vec![9]).with_content_type("image/png"));
        let json = serde_json::to_string(&payload).unwrap();
        let parsed: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
