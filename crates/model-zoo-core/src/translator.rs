//! The bidirectional conversion contract.

use crate::error::TranslateResult;
use crate::payload::{Payload, TensorList};

/// A bidirectional conversion pipeline between a domain-level payload and
/// the engine-ready tensor representation.
///
/// Implementations must be thread-safe: once constructed, a translator is
/// shared across worker threads and both methods are pure with respect to
/// translator state.
pub trait Translator: Send + Sync {
    /// Converts a domain input into an engine-ready tensor list.
    fn process_input(&self, input: &Payload) -> TranslateResult<TensorList>;

    /// Converts raw engine output into a domain payload.
    fn process_output(&self, output: &TensorList) -> TranslateResult<Payload>;
}
