//! Port trait implementation for `AnnotatorClient`.
//!
//! This module implements the core-owned `AnnotatorPort` trait, mapping the
//! client's internal errors onto core port errors.

use async_trait::async_trait;
use synext_core::{Annotation, AnnotationRequest, AnnotatorError, AnnotatorPort, AnnotatorResult};

use crate::client::AnnotatorClient;
use crate::error::ClientError;
use crate::http::HttpBackend;

/// Convert internal `ClientError` to core `AnnotatorError`.
pub(crate) fn map_error(err: ClientError) -> AnnotatorError {
    match err {
        ClientError::ApiRequestFailed { status, .. } => AnnotatorError::HttpStatus { status },
        ClientError::InvalidResponse { message } => AnnotatorError::MalformedBody { message },
        ClientError::ShortBody { length } => AnnotatorError::ShortBody { length },
        ClientError::Network(e) if e.is_builder() => AnnotatorError::Configuration {
            message: e.to_string(),
        },
        ClientError::Network(e) => AnnotatorError::Network {
            message: e.to_string(),
        },
        ClientError::InvalidUrl(e) => AnnotatorError::Configuration {
            message: e.to_string(),
        },
        ClientError::JsonParse(e) => AnnotatorError::MalformedBody {
            message: e.to_string(),
        },
    }
}

impl From<ClientError> for AnnotatorError {
    fn from(err: ClientError) -> Self {
        map_error(err)
    }
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> AnnotatorPort for AnnotatorClient<B> {
    async fn annotate(&self, request: &AnnotationRequest) -> AnnotatorResult<Annotation> {
        self.fetch_annotation(request).await.map_err(map_error)
    }
}
