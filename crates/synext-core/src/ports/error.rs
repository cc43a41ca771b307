//! Error types for annotator port operations.

use thiserror::Error;

/// Errors from annotator port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// The service could not be reached or the transfer failed.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("Annotation service returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response body is too short to fill both output regions.
    #[error("Response body too short: {length} character(s), need at least 2")]
    ShortBody {
        /// Body length in characters
        length: usize,
    },

    /// The response body could not be interpreted.
    #[error("Malformed response body: {message}")]
    MalformedBody {
        /// What was wrong with the body
        message: String,
    },

    /// The client is misconfigured (bad endpoint, unusable TLS setup).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl AnnotatorError {
    /// Whether the failure came from the body rather than the transport.
    pub const fn is_body_error(&self) -> bool {
        matches!(self, Self::ShortBody { .. } | Self::MalformedBody { .. })
    }
}

/// Result type alias for annotator port operations.
pub type AnnotatorResult<T> = Result<T, AnnotatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnnotatorError::HttpStatus { status: 502 };
        assert!(err.to_string().contains("502"));

        let err = AnnotatorError::ShortBody { length: 1 };
        assert!(err.to_string().contains("1 character"));

        let err = AnnotatorError::MalformedBody {
            message: "missing field `baseline`".to_string(),
        };
        assert!(err.to_string().contains("baseline"));
    }

    #[test]
    fn test_body_error_classification() {
        assert!(AnnotatorError::ShortBody { length: 0 }.is_body_error());
        assert!(
            AnnotatorError::MalformedBody {
                message: String::new()
            }
            .is_body_error()
        );
        assert!(!AnnotatorError::HttpStatus { status: 500 }.is_body_error());
        assert!(
            !AnnotatorError::Network {
                message: "refused".to_string()
            }
            .is_body_error()
        );
    }
}
