//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use synext_client::{AnnotatorClientConfig, ResponseFormat};

use crate::commands::Commands;

/// How the annotation service's response body is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// JSON `{syntax, baseline}` object
    #[default]
    Structured,
    /// First two characters of the raw body
    CharPair,
}

impl From<FormatArg> for ResponseFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Structured => Self::Structured,
            FormatArg::CharPair => Self::CharPair,
        }
    }
}

/// Command-line interface for the syntax extractor client.
#[derive(Parser)]
#[command(name = "synext")]
#[command(about = "Find syntactically similar words and sentences via the syntax extractor service")]
#[command(version)]
pub struct Cli {
    /// Annotation endpoint URL
    #[arg(long, global = true, env = "SYNEXT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SYNEXT_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Retries for network errors and 5xx responses
    #[arg(long, global = true, env = "SYNEXT_RETRIES")]
    pub retries: Option<u8>,

    /// Response body format
    #[arg(long, global = true, env = "SYNEXT_FORMAT", value_enum, default_value_t)]
    pub format: FormatArg,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Client configuration from the global options.
    pub fn client_config(&self) -> AnnotatorClientConfig {
        let mut config = AnnotatorClientConfig::new().with_response_format(self.format.into());
        if let Some(ref endpoint) = self.endpoint {
            config = config.with_base_url(endpoint.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = self.retries {
            config = config.with_max_retries(retries);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "synext",
            "--verbose",
            "--endpoint",
            "http://localhost:5000/syntax_extractor/",
            "--format",
            "char-pair",
            "annotate",
            "hello",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.format, FormatArg::CharPair);

        let config = cli.client_config();
        assert_eq!(config.base_url(), "http://localhost:5000/syntax_extractor/");
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(
            ResponseFormat::from(FormatArg::Structured),
            ResponseFormat::Structured
        );
        assert_eq!(
            ResponseFormat::from(FormatArg::CharPair),
            ResponseFormat::CharPair
        );
    }
}
