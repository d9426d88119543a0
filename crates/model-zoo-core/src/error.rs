//! Error types for translator dispatch and conversion.

use crate::kind::IoKind;
use thiserror::Error;

/// Errors from translator construction and conversion
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Dispatch was requested for a type pair with no registered rule.
    ///
    /// This is a configuration error, not a transient condition: retrying
    /// with the same pair cannot succeed.
    #[error("unsupported type pair: {input} -> {output}")]
    UnsupportedTypePair {
        /// Requested input kind
        input: IoKind,
        /// Requested output kind
        output: IoKind,
    },
    /// A configuration option was present but carried the wrong value type.
    #[error("invalid argument '{key}': {reason}")]
    InvalidArgument {
        /// Option key
        key: String,
        /// What was expected and what was found
        reason: String,
    },
    /// A translator received a payload of a kind it does not accept.
    #[error("unexpected payload: expected {expected}, found {found}")]
    UnexpectedPayload {
        /// Kind the translator accepts
        expected: IoKind,
        /// Kind it was given
        found: IoKind,
    },
    /// Source bytes could not be retrieved.
    #[error("failed to fetch source bytes: {0}")]
    FetchFailed(String),
    /// The configured fetcher does not handle this source kind.
    #[error("source fetch not supported: {0}")]
    FetchUnsupported(String),
    /// An envelope or raw payload could not be decoded.
    #[error("failed to decode payload: {0}")]
    DecodeFailed(String),
    /// The underlying conversion itself failed.
    #[error("translation failed: {0}")]
    ProcessingFailed(String),
}

/// Result type for translator operations
pub type TranslateResult<T> = Result<T, TranslateError>;
