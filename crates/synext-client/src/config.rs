//! Public configuration for the annotation client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default annotation endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://nlp.biu.ac.il/~lazary/syntax_extractor/";

/// How a response body is turned into the two output parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// JSON object `{"syntax": .., "baseline": ..}` or a two-string array.
    #[default]
    Structured,
    /// First character to syntax, second to baseline.
    CharPair,
}

impl std::str::FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(Self::Structured),
            "char-pair" | "charpair" | "chars" => Ok(Self::CharPair),
            other => Err(format!(
                "unknown response format '{other}' (expected 'structured' or 'char-pair')"
            )),
        }
    }
}

/// Configuration for the annotation client.
///
/// # Example
///
/// ```
/// use synext_client::AnnotatorClientConfig;
/// use std::time::Duration;
///
/// let config = AnnotatorClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct AnnotatorClientConfig {
    /// Annotation endpoint; the query string is appended to it
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
    /// Body interpretation
    pub(crate) response_format: ResponseFormat,
}

impl Default for AnnotatorClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("synext-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(500),
            response_format: ResponseFormat::Structured,
        }
    }
}

impl AnnotatorClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annotation endpoint.
    ///
    /// Defaults to [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 2 retries. Zero disables retrying.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Set how response bodies are interpreted.
    #[must_use]
    pub const fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// The configured endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
