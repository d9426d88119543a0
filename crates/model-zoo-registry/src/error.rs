//! Error types for model resolution.

use thiserror::Error;

/// Errors from zoo registration and model resolution
///
/// All variants are caller-visible configuration or usage errors, reported
/// synchronously and never retried internally.
#[derive(Error, Debug)]
pub enum ZooError {
    /// Resolution was requested against a group id never registered.
    #[error("unknown model group: {0}")]
    UnknownGroup(String),
    /// The matched zoo does not declare support for the target engine.
    #[error("engine '{engine}' is not supported by model group '{group_id}'")]
    EngineNotSupported {
        /// Target engine name
        engine: String,
        /// Group id of the matched zoo
        group_id: String,
    },
    /// The resolution scan found no record satisfying the filters.
    #[error("no model matching {0}")]
    NoMatchingModel(String),
    /// Registration was attempted for an already-present group id.
    #[error("model group already registered: {0}")]
    DuplicateGroupId(String),
    /// A loader was added to a zoo with a different group id.
    #[error("loader group '{found}' does not belong to zoo group '{expected}'")]
    GroupMismatch {
        /// The zoo's group id
        expected: String,
        /// The loader's group id
        found: String,
    },
    /// A repository base URL cannot carry artifact path segments.
    #[error("invalid repository uri: {0}")]
    InvalidRepositoryUri(String),
}

/// Result type for zoo operations
pub type ZooResult<T> = Result<T, ZooError>;
