//! Web command: serve the demo page and the annotate proxy.

use std::sync::Arc;

use anyhow::Result;
use synext_axum::{AxumContext, ServerConfig, serve};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Build the server configuration from command arguments.
///
/// # Errors
///
/// Returns [`CliError::Arguments`] when an origin is not an http(s) origin.
pub fn server_config(
    ctx: &CliContext,
    host: String,
    port: u16,
    allow_origin: Vec<String>,
) -> Result<ServerConfig, CliError> {
    if let Some(bad) = allow_origin
        .iter()
        .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
    {
        return Err(CliError::Arguments(format!(
            "--allow-origin expects an http(s) origin, got '{bad}'"
        )));
    }

    let mut config = ServerConfig {
        host,
        port,
        ..ServerConfig::default()
    }
    .with_client(ctx.client_config.clone());
    if !allow_origin.is_empty() {
        config = config.with_allowed_origins(allow_origin);
    }
    Ok(config)
}

/// Web adapter context sharing the CLI's annotation client.
pub fn axum_context(ctx: &CliContext) -> AxumContext {
    AxumContext::new(Arc::clone(&ctx.annotator))
}

/// Execute the web command; runs until the process is stopped.
///
/// # Errors
///
/// Bind and accept failures are reported as [`CliError::Io`].
pub async fn execute(
    ctx: &CliContext,
    host: String,
    port: u16,
    allow_origin: Vec<String>,
) -> Result<()> {
    let config = server_config(ctx, host, port, allow_origin)?;
    println!("Serving demo page on http://{}", config.bind_addr());
    serve(axum_context(ctx), &config)
        .await
        .map_err(|e| CliError::Io(format!("{e:#}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::ScriptedAnnotator;
    use synext_axum::CorsConfig;
    use synext_client::AnnotatorClientConfig;

    fn ctx() -> CliContext {
        CliContext::new(
            Arc::new(ScriptedAnnotator::new()),
            AnnotatorClientConfig::new().with_base_url("http://localhost:9/syntax_extractor/"),
        )
    }

    #[test]
    fn test_server_config_carries_client_settings() {
        let config = server_config(&ctx(), "0.0.0.0".to_string(), 8080, Vec::new()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.client.base_url(), "http://localhost:9/syntax_extractor/");
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn test_server_config_origins() {
        let config = server_config(
            &ctx(),
            "127.0.0.1".to_string(),
            5000,
            vec!["http://localhost:3000".to_string()],
        )
        .unwrap();
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 1));

        let err = server_config(&ctx(), "127.0.0.1".to_string(), 5000, vec!["*".to_string()])
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_axum_context_reuses_annotator() {
        let ctx = ctx();
        let web = axum_context(&ctx);
        assert!(Arc::ptr_eq(&web.annotator, &ctx.annotator));
    }

    #[tokio::test]
    async fn test_bind_failure_is_io_error() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = execute(&ctx(), "127.0.0.1".to_string(), port, Vec::new())
            .await
            .unwrap_err();

        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 74);
        assert!(cli_err.to_string().contains("failed to bind"));
    }
}
