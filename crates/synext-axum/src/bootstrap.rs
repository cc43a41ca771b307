//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::{Context, Result};
use synext_client::{AnnotatorClientConfig, DefaultAnnotatorClient};
use synext_core::AnnotatorPort;

/// Default listening port, the same one the annotation service demo used.
pub const DEFAULT_PORT: u16 = 5000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Upstream annotation client settings.
    pub client: AnnotatorClientConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
            client: AnnotatorClientConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Set the upstream client configuration.
    #[must_use]
    pub fn with_client(mut self, client: AnnotatorClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Services available to request handlers.
pub struct AxumContext {
    /// Upstream annotation backend.
    pub annotator: Arc<dyn AnnotatorPort>,
}

impl AxumContext {
    /// Build a context around an existing annotator (used by tests and
    /// embedding applications).
    pub fn new(annotator: Arc<dyn AnnotatorPort>) -> Self {
        Self { annotator }
    }
}

/// Build the context with the HTTP annotation client.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let client = DefaultAnnotatorClient::new(&config.client)
        .context("failed to create annotation client")?;

    tracing::info!(endpoint = config.client.base_url(), "Annotation client ready");

    Ok(AxumContext::new(Arc::new(client)))
}

/// Bootstrap and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    serve(ctx, &config).await
}

/// Serve an already composed context until the process is stopped.
///
/// Every error from here is an I/O failure (bind or accept) with the
/// [`std::io::Error`] as its root cause.
pub async fn serve(ctx: AxumContext, config: &ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("synext web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
