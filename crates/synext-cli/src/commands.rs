//! Available subcommands.

use clap::Subcommand;
use synext_axum::DEFAULT_PORT;
use synext_core::AnnotationMode;

/// Available commands for the syntax extractor client.
#[derive(Subcommand)]
pub enum Commands {
    /// Annotate one text and print both output regions
    Annotate {
        /// Text to annotate; mark the target word with asterisks
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Look up whole sentences instead of the marked word
        #[arg(short, long)]
        sentence: bool,
        /// Print the panel as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: every line is annotated into the same panel
    Repl {
        /// Start in sentence mode (toggle with /mode)
        #[arg(short, long)]
        sentence: bool,
    },

    /// Serve the demo page and the /api/annotate proxy
    Web {
        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Allowed CORS origin (repeatable); all origins when omitted
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },
}

/// Map a `--sentence` flag to a lookup mode.
pub const fn mode_from_flag(sentence: bool) -> AnnotationMode {
    if sentence {
        AnnotationMode::Sentence
    } else {
        AnnotationMode::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_annotate_joins_words() {
        let cli = Cli::parse_from(["synext", "annotate", "--sentence", "John", "likes", "Mary"]);
        match cli.command {
            Some(Commands::Annotate {
                text,
                sentence,
                json,
            }) => {
                assert_eq!(text.join(" "), "John likes Mary");
                assert!(sentence);
                assert!(!json);
            }
            _ => panic!("Expected annotate command"),
        }
    }

    #[test]
    fn test_annotate_requires_text() {
        assert!(Cli::try_parse_from(["synext", "annotate"]).is_err());
    }

    #[test]
    fn test_web_defaults() {
        let cli = Cli::parse_from(["synext", "web"]);
        match cli.command {
            Some(Commands::Web {
                host,
                port,
                allow_origin,
            }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, DEFAULT_PORT);
                assert!(allow_origin.is_empty());
            }
            _ => panic!("Expected web command"),
        }
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(mode_from_flag(false), AnnotationMode::Word);
        assert_eq!(mode_from_flag(true), AnnotationMode::Sentence);
    }
}
