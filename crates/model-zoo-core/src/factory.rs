//! Translator factory and adapter dispatch.
//!
//! The dispatcher maps a requested `(input, output)` pair onto the base
//! translator with the minimal wrapping needed: the native pair builds the
//! base directly, source kinds get the matching input adapter, and the
//! request/response pair gets the serving adapter. Conversion semantics are
//! written once in the base translator; only the outer adapter varies.

use crate::arguments::TranslatorArgs;
use crate::error::{TranslateError, TranslateResult};
use crate::kind::{IoKind, TypePair};
use crate::model::ModelHandle;
use crate::translator::Translator;
use crate::wrapper::{
    FileTranslator, FsSourceFetcher, ServingTranslator, SourceFetcher, StreamTranslator,
    UrlTranslator,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Builds the base translator a factory dispatches for.
///
/// Construction failure propagates to the factory caller as-is.
pub trait BaseTranslatorBuilder: Send + Sync {
    /// The type pair the base translator natively converts between.
    fn native_pair(&self) -> TypePair;

    /// Builds the base translator from the configuration bag.
    fn build(
        &self,
        model: &ModelHandle,
        args: &TranslatorArgs,
    ) -> TranslateResult<Box<dyn Translator>>;
}

/// Produces a ready translator for a requested type pair.
pub trait TranslatorFactory: Send + Sync {
    /// The declared native pairs. Every other pair the factory can satisfy
    /// is implied by its wrapping rules; callers use this to pre-validate
    /// compatibility without attempting construction.
    fn supported_type_pairs(&self) -> HashSet<TypePair>;

    /// Builds a translator for the requested pair, or fails with
    /// [`TranslateError::UnsupportedTypePair`] when no rule matches.
    ///
    /// Deterministic and side-effect-free beyond allocation; construction is
    /// all-or-nothing.
    fn create(
        &self,
        input: IoKind,
        output: IoKind,
        model: &ModelHandle,
        args: &TranslatorArgs,
    ) -> TranslateResult<Box<dyn Translator>>;
}

/// The adapter dispatch registry.
///
/// Owns one base-translator builder and the byte fetcher its source adapters
/// use. Populated at construction and read-only afterwards; safe to share
/// across worker threads.
pub struct AdapterDispatch {
    base: Box<dyn BaseTranslatorBuilder>,
    fetcher: Arc<dyn SourceFetcher>,
}

impl AdapterDispatch {
    /// Creates a dispatcher with the filesystem-only fetcher.
    pub fn new(base: Box<dyn BaseTranslatorBuilder>) -> Self {
        Self {
            base,
            fetcher: Arc::new(FsSourceFetcher),
        }
    }

    /// Replaces the source fetcher.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn SourceFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// The native pair of the underlying base translator.
    pub fn native_pair(&self) -> TypePair {
        self.base.native_pair()
    }
}

impl TranslatorFactory for AdapterDispatch {
    fn supported_type_pairs(&self) -> HashSet<TypePair> {
        HashSet::from([self.base.native_pair()])
    }

    #[instrument(skip(self, model, args))]
    fn create(
        &self,
        input: IoKind,
        output: IoKind,
        model: &ModelHandle,
        args: &TranslatorArgs,
    ) -> TranslateResult<Box<dyn Translator>> {
        let native = self.base.native_pair();
        let requested = TypePair::new(input, output);

        if requested == native {
            debug!(pair = %requested, "building base translator");
            return self.base.build(model, args);
        }

        if output == native.output {
            match input {
                IoKind::File => {
                    debug!(pair = %requested, "wrapping base translator for file input");
                    let base = self.base.build(model, args)?;
                    return Ok(Box::new(FileTranslator::new(base, Arc::clone(&self.fetcher))));
                }
                IoKind::Url => {
                    debug!(pair = %requested, "wrapping base translator for url input");
                    let base = self.base.build(model, args)?;
                    return Ok(Box::new(UrlTranslator::new(base, Arc::clone(&self.fetcher))));
                }
                IoKind::Stream => {
                    debug!(pair = %requested, "wrapping base translator for stream input");
                    let base = self.base.build(model, args)?;
                    return Ok(Box::new(StreamTranslator::new(base)));
                }
                _ => {}
            }
        }

        if requested == TypePair::new(IoKind::Request, IoKind::Response) {
            debug!(pair = %requested, "wrapping base translator for serving");
            let base = self.base.build(model, args)?;
            return Ok(Box::new(ServingTranslator::new(base)));
        }

        Err(TranslateError::UnsupportedTypePair { input, output })
    }
}
