//! Annotation client.
//!
//! Builds the request URL, fetches the body through an [`HttpBackend`] and
//! parses it according to the configured format.

use synext_core::{Annotation, AnnotationRequest};

use crate::config::AnnotatorClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::EndpointConfig;
use crate::parsing::parse_annotation;
use crate::url::build_annotate_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default annotation client using the reqwest HTTP backend.
pub type DefaultAnnotatorClient = AnnotatorClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the syntax extractor service.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultAnnotatorClient` in production code and talk to it through
/// the `AnnotatorPort` trait.
pub struct AnnotatorClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: EndpointConfig,
}

impl DefaultAnnotatorClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &AnnotatorClientConfig) -> ClientResult<Self> {
        let config = EndpointConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ClientResult<Self> {
        Self::new(&AnnotatorClientConfig::default())
    }
}

impl<B: HttpBackend> AnnotatorClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: EndpointConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch and parse one annotation.
    pub(crate) async fn fetch_annotation(
        &self,
        request: &AnnotationRequest,
    ) -> ClientResult<Annotation> {
        let url = build_annotate_url(&self.config, request);
        tracing::debug!(%url, mode = %request.mode, "Requesting annotation");

        let body = self.backend.get_text(&url).await?;
        tracing::debug!(bytes = body.len(), "Received annotation body");

        parse_annotation(&body, self.config.response_format)
    }
}
