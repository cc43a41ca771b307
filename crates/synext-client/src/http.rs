//! HTTP backend abstraction for the annotation service.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use crate::error::{ClientError, ClientResult};
use crate::models::EndpointConfig;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Upper bound for a single backoff sleep.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch a text body from a URL.
///
/// This is an implementation detail - external code should use the
/// `AnnotatorPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and return the body as text. Non-2xx is an error.
    async fn get_text(&self, url: &Url) -> ClientResult<String>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &EndpointConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Delay before the given retry attempt (1-based).
    ///
    /// Doubles per attempt and saturates at [`MAX_BACKOFF`].
    fn backoff_delay(&self, attempt: u8) -> Duration {
        let exponent = u32::from(attempt.max(1)) - 1;
        let factor = 2u64.checked_pow(exponent).unwrap_or(u64::MAX);
        let delay_ms = self.retry_base_delay_ms.saturating_mul(factor);
        Duration::from_millis(delay_ms).min(MAX_BACKOFF)
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> ClientResult<reqwest::Response> {
        let mut last_error: Option<ClientError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff_delay(attempt);
                tracing::debug!(attempt, ?delay, "Retrying annotation request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(ClientError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(ClientError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        tracing::debug!(error = %e, "Annotation request failed");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> ClientResult<String> {
        let response = self.fetch_with_retry(url).await?;
        Ok(response.text().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned outcome for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        /// 200 with this body
        Body(String),
        /// Non-success status
        Status(u16),
    }

    /// A fake HTTP backend that replays canned responses in order and
    /// records every requested URL.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        responses: Arc<Mutex<Vec<CannedResponse>>>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a 200 response with `body`.
        pub fn with_body(self, body: &str) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push(CannedResponse::Body(body.to_string()));
            self
        }

        /// Queue a failing status.
        pub fn with_status(self, status: u16) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push(CannedResponse::Status(status));
            self
        }

        /// URLs requested so far.
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_text(&self, url: &Url) -> ClientResult<String> {
            self.requested.lock().unwrap().push(url.to_string());

            let next = {
                let mut responses = self.responses.lock().unwrap();
                (!responses.is_empty()).then(|| responses.remove(0))
            };

            match next {
                Some(CannedResponse::Body(body)) => Ok(body),
                Some(CannedResponse::Status(status)) => Err(ClientError::ApiRequestFailed {
                    status,
                    url: url.to_string(),
                }),
                None => Err(ClientError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }
}
