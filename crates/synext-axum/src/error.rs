//! Axum-specific error types and mappings.
//!
//! Maps annotator port errors to HTTP status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use synext_core::AnnotatorError;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream service answered, but not usefully.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Service unavailable (upstream unreachable).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
}

impl HttpError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, error_type) = match self {
            Self::BadRequest(msg) => (msg, None),
            Self::BadGateway(msg) => (msg, Some("UPSTREAM_RESPONSE")),
            Self::ServiceUnavailable(msg) => (msg, Some("UPSTREAM_UNREACHABLE")),
            Self::Internal(msg) => (msg, None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<AnnotatorError> for HttpError {
    fn from(err: AnnotatorError) -> Self {
        match err {
            AnnotatorError::Network { .. } => Self::ServiceUnavailable(err.to_string()),
            AnnotatorError::HttpStatus { .. }
            | AnnotatorError::ShortBody { .. }
            | AnnotatorError::MalformedBody { .. } => Self::BadGateway(err.to_string()),
            AnnotatorError::Configuration { message } => Self::Internal(message),
        }
    }
}
