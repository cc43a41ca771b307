//! Error types for annotation client operations.
//!
//! These errors are internal to `synext-client` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors related to talking to the annotation service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request failed with an HTTP error status.
    #[error("Annotation request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The body was readable but not in the expected shape.
    #[error("Invalid response from annotation service: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The body holds fewer than two characters.
    #[error("Response body has {length} character(s), expected at least 2")]
    ShortBody {
        /// Body length in characters
        length: usize,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ClientError::ApiRequestFailed {
            status: 404,
            url: "http://nlp.biu.ac.il/~lazary/syntax_extractor/?text=a".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("syntax_extractor"));
    }

    #[test]
    fn test_short_body_error_message() {
        let error = ClientError::ShortBody { length: 0 };
        assert!(error.to_string().contains("0 character"));
    }

    #[test]
    fn test_invalid_url_from_parse_error() {
        let error: ClientError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(error, ClientError::InvalidUrl(_)));
    }
}
