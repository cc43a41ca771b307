//! Internal configuration derived from [`AnnotatorClientConfig`].
//!
//! [`AnnotatorClientConfig`]: crate::config::AnnotatorClientConfig

use std::time::Duration;

use url::Url;

use crate::config::{AnnotatorClientConfig, DEFAULT_ENDPOINT, ResponseFormat};
use crate::error::ClientResult;

/// Validated client settings.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Parsed annotation endpoint
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 2)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
    /// Body interpretation
    pub response_format: ResponseFormat,
}

impl EndpointConfig {
    /// Validate a public config. Fails when the endpoint is not a URL.
    pub fn from_public(config: &AnnotatorClientConfig) -> ClientResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
            response_format: config.response_format,
        })
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint URL is valid"),
            user_agent: concat!("synext-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_base_delay_ms: 500,
            response_format: ResponseFormat::Structured,
        }
    }
}
