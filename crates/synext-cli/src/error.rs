//! CLI-specific error types and mappings.
//!
//! Maps annotator and client errors to exit codes and user-facing messages.

use synext_client::ClientError;
use synext_core::AnnotatorError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input problem.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, history file).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The annotation service could not be reached.
    #[error("{0}")]
    Unavailable(String),

    /// The annotation service answered with an error or an unusable body.
    #[error("{0}")]
    Upstream(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 69: Service unavailable
    /// - 74: I/O error
    /// - 76: Remote protocol error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Upstream(_) => 76,    // EX_PROTOCOL
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<AnnotatorError> for CliError {
    fn from(err: AnnotatorError) -> Self {
        match err {
            AnnotatorError::Network { .. } => Self::Unavailable(err.to_string()),
            AnnotatorError::HttpStatus { .. }
            | AnnotatorError::ShortBody { .. }
            | AnnotatorError::MalformedBody { .. } => Self::Upstream(err.to_string()),
            AnnotatorError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err: CliError = AnnotatorError::Network {
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 69);

        let err: CliError = AnnotatorError::ShortBody { length: 1 }.into();
        assert_eq!(err.exit_code(), 76);
        assert!(err.to_string().contains("too short"));

        let err: CliError = AnnotatorError::Configuration {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 78);

        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(
            CliError::from(std::io::Error::other("tty gone")).exit_code(),
            74
        );
    }
}
