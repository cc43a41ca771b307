//! CLI bootstrap - the composition root.
//!
//! The HTTP annotation client is built here; handlers only see the
//! [`AnnotatorPort`] trait object.

use std::sync::Arc;

use synext_client::{AnnotatorClientConfig, DefaultAnnotatorClient};
use synext_core::{AnnotatorPort, OutputPanel};

use crate::error::CliError;

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Annotation backend.
    pub annotator: Arc<dyn AnnotatorPort>,
    /// Client settings the annotator was built from (reused by `web`).
    pub client_config: AnnotatorClientConfig,
}

impl CliContext {
    /// Build a context around an existing annotator.
    pub fn new(annotator: Arc<dyn AnnotatorPort>, client_config: AnnotatorClientConfig) -> Self {
        Self {
            annotator,
            client_config,
        }
    }

    /// A fresh, empty output panel.
    pub fn new_panel(&self) -> Arc<OutputPanel> {
        Arc::new(OutputPanel::new())
    }
}

/// Build the CLI context with the HTTP annotation client.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the endpoint URL or HTTP client
/// cannot be set up.
pub fn bootstrap(config: AnnotatorClientConfig) -> Result<CliContext, CliError> {
    let client = DefaultAnnotatorClient::new(&config)?;
    tracing::debug!(endpoint = config.base_url(), "Annotation client ready");
    Ok(CliContext::new(Arc::new(client), config))
}
