//! I/O kinds and type pairs.
//!
//! Translator dispatch is driven by a closed enumeration of input/output
//! kinds rather than runtime type introspection. A [`TypePair`] is the
//! signature a factory declares support for and the key the dispatcher
//! matches on; identity is structural.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The external shape of a value entering or leaving a translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoKind {
    /// Fully decoded domain object, ready for tensor conversion
    Decoded,
    /// Path to a file on local disk
    File,
    /// Remote resource address
    Url,
    /// Raw encoded bytes
    Stream,
    /// Serving request envelope
    Request,
    /// Serving response envelope
    Response,
}

impl IoKind {
    /// Returns `true` for kinds that name a source of raw bytes the
    /// dispatcher knows how to adapt on the input side.
    pub fn is_source(self) -> bool {
        matches!(self, IoKind::File | IoKind::Url | IoKind::Stream)
    }

    /// Stable lowercase name used in diagnostics and wire forms.
    pub fn as_str(self) -> &'static str {
        match self {
            IoKind::Decoded => "decoded",
            IoKind::File => "file",
            IoKind::Url => "url",
            IoKind::Stream => "stream",
            IoKind::Request => "request",
            IoKind::Response => "response",
        }
    }
}

impl fmt::Display for IoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered `(input, output)` kind signature.
///
/// Immutable once constructed; usable as a set or map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypePair {
    /// Input kind
    pub input: IoKind,
    /// Output kind
    pub output: IoKind,
}

impl TypePair {
    /// Creates a type pair.
    pub const fn new(input: IoKind, output: IoKind) -> Self {
        Self { input, output }
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.output)
    }
}
