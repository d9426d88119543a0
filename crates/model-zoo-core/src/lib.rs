//! Core types and translator dispatch for the Model Zoo
//!
//! This crate contains the data structures and dispatch logic that select
//! the correct input/output conversion pipeline for a requested type pair:
//! I/O kinds and type pairs, runtime payloads, the translator contract, the
//! wrapper adapters that change a translator's outer I/O surface, and the
//! factory that composes them.

pub mod arguments;
pub mod envelope;
pub mod error;
pub mod factory;
pub mod kind;
pub mod model;
pub mod payload;
pub mod translator;
pub mod wrapper;

// Re-exports for convenience
pub use arguments::TranslatorArgs;
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::{TranslateError, TranslateResult};
pub use factory::{AdapterDispatch, BaseTranslatorBuilder, TranslatorFactory};
pub use kind::{IoKind, TypePair};
pub use model::ModelHandle;
pub use payload::{DecodedValue, Payload, TensorList};
pub use translator::Translator;
pub use wrapper::{
    FileTranslator, FsSourceFetcher, ServingTranslator, SourceFetcher, StreamTranslator,
    UrlTranslator,
};
