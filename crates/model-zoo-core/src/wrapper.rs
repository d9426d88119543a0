//! Wrapper translators.
//!
//! A wrapper decorates a base [`Translator`] by composition, changing the
//! outer kind of exactly one side of the conversion and forwarding the other
//! side unchanged. Wrapping is single-hop: the dispatcher chooses at most one
//! wrapper per side.

use crate::envelope::ResponseEnvelope;
use crate::error::{TranslateError, TranslateResult};
use crate::kind::IoKind;
use crate::payload::{DecodedValue, Payload, TensorList};
use crate::translator::Translator;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Retrieves raw bytes for source-kind inputs.
///
/// Network retrieval is a collaborator concern; the dispatch core only needs
/// the byte stream. Deployments inject a fetcher wired to their transport.
pub trait SourceFetcher: Send + Sync {
    /// Reads the bytes behind a file path.
    fn fetch_file(&self, path: &Path) -> TranslateResult<Vec<u8>>;

    /// Retrieves the bytes behind a URL.
    fn fetch_url(&self, url: &Url) -> TranslateResult<Vec<u8>>;
}

/// Filesystem-only fetcher used when no transport is configured.
///
/// URL retrieval is refused rather than stubbed: an HTTP client is an
/// external collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceFetcher;

impl SourceFetcher for FsSourceFetcher {
    fn fetch_file(&self, path: &Path) -> TranslateResult<Vec<u8>> {
        fs::read(path)
            .map_err(|e| TranslateError::FetchFailed(format!("{}: {}", path.display(), e)))
    }

    fn fetch_url(&self, url: &Url) -> TranslateResult<Vec<u8>> {
        Err(TranslateError::FetchUnsupported(url.to_string()))
    }
}

fn expect_kind(input: &Payload, expected: IoKind) -> TranslateError {
    TranslateError::UnexpectedPayload {
        expected,
        found: input.kind(),
    }
}

/// Accepts a file path, decodes to the object kind the base expects.
pub struct FileTranslator {
    inner: Box<dyn Translator>,
    fetcher: Arc<dyn SourceFetcher>,
}

impl FileTranslator {
    /// Wraps a base translator.
    pub fn new(inner: Box<dyn Translator>, fetcher: Arc<dyn SourceFetcher>) -> Self {
        Self { inner, fetcher }
    }
}

impl Translator for FileTranslator {
    fn process_input(&self, input: &Payload) -> TranslateResult<TensorList> {
        let Payload::File(path) = input else {
            return Err(expect_kind(input, IoKind::File));
        };
        let bytes = self.fetcher.fetch_file(path)?;
        let mut value = DecodedValue::new(bytes);
        if let Some(mime) = mime_guess::from_path(path).first_raw() {
            value = value.with_content_type(mime);
        }
        self.inner.process_input(&Payload::Decoded(value))
    }

    fn process_output(&self, output: &TensorList) -> TranslateResult<Payload> {
        self.inner.process_output(output)
    }
}

/// Accepts a URL, decodes to the object kind the base expects.
pub struct UrlTranslator {
    inner: Box<dyn Translator>,
    fetcher: Arc<dyn SourceFetcher>,
}

impl UrlTranslator {
    /// Wraps a base translator.
    pub fn new(inner: Box<dyn Translator>, fetcher: Arc<dyn SourceFetcher>) -> Self {
        Self { inner, fetcher }
    }
}

impl Translator for UrlTranslator {
    fn process_input(&self, input: &Payload) -> TranslateResult<TensorList> {
        let Payload::Url(url) = input else {
            return Err(expect_kind(input, IoKind::Url));
        };
        let bytes = self.fetcher.fetch_url(url)?;
        self.inner
            .process_input(&Payload::Decoded(DecodedValue::new(bytes)))
    }

    fn process_output(&self, output: &TensorList) -> TranslateResult<Payload> {
        self.inner.process_output(output)
    }
}

/// Accepts raw bytes, decodes to the object kind the base expects.
pub struct StreamTranslator {
    inner: Box<dyn Translator>,
}

impl StreamTranslator {
    /// Wraps a base translator.
    pub fn new(inner: Box<dyn Translator>) -> Self {
        Self { inner }
    }
}

impl Translator for StreamTranslator {
    fn process_input(&self, input: &Payload) -> TranslateResult<TensorList> {
        let Payload::Stream(bytes) = input else {
            return Err(expect_kind(input, IoKind::Stream));
        };
        self.inner
            .process_input(&Payload::Decoded(DecodedValue::new(bytes.clone())))
    }

    fn process_output(&self, output: &TensorList) -> TranslateResult<Payload> {
        self.inner.process_output(output)
    }
}

/// Adapts a base translator to the serving envelope pair.
///
/// Unpacks the request body into the decoded kind on the way in; packs the
/// decoded output into a response envelope on the way out. Envelope
/// properties are engine/frontend metadata and pass through opaquely.
pub struct ServingTranslator {
    inner: Box<dyn Translator>,
}

impl ServingTranslator {
    /// Wraps a base translator.
    pub fn new(inner: Box<dyn Translator>) -> Self {
        Self { inner }
    }
}

impl Translator for ServingTranslator {
    fn process_input(&self, input: &Payload) -> TranslateResult<TensorList> {
        let Payload::Request(request) = input else {
            return Err(expect_kind(input, IoKind::Request));
        };
        let mut value = DecodedValue::new(request.body().to_vec());
        if let Some(content_type) = request.property("content-type") {
            value = value.with_content_type(content_type);
        }
        self.inner.process_input(&Payload::Decoded(value))
    }

    fn process_output(&self, output: &TensorList) -> TranslateResult<Payload> {
        match self.inner.process_output(output)? {
            Payload::Decoded(value) => {
                let mut response = ResponseEnvelope::ok(value.data().to_vec());
                if let Some(content_type) = value.content_type() {
                    response = response.with_property("content-type", content_type);
                }
                Ok(Payload::Response(response))
            }
            other => Err(expect_kind(&other, IoKind::Decoded)),
        }
    }
}
