//! Interactive annotate session.
//!
//! Every line typed is written to one shared input field and annotated into
//! one shared panel, so a failed lookup leaves the previous result on screen.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use synext_core::{AnnotateOutcome, AnnotateService, AnnotationMode, SharedInput};
use tokio::runtime::Handle;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_panel;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/mode", "Toggle word / sentence lookup"),
    ("/show", "Print the current output regions"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplAction {
    /// Print the text (possibly empty) and read the next line.
    Continue(String),
    Exit,
}

/// State of one interactive session.
pub struct ReplSession {
    service: AnnotateService,
    input: SharedInput,
}

impl ReplSession {
    pub fn new(ctx: &CliContext, mode: AnnotationMode) -> Self {
        Self {
            service: AnnotateService::new(Arc::clone(&ctx.annotator), ctx.new_panel())
                .with_mode(mode),
            input: SharedInput::new(),
        }
    }

    pub const fn mode(&self) -> AnnotationMode {
        self.service.mode()
    }

    /// Handle one line of input.
    pub async fn handle_line(&mut self, line: &str) -> ReplAction {
        let line = line.trim();
        if line.is_empty() {
            return ReplAction::Continue(String::new());
        }

        let Some(cmd) = line.strip_prefix('/') else {
            return ReplAction::Continue(self.annotate(line).await);
        };

        match cmd.split_whitespace().next().unwrap_or("") {
            "exit" | "quit" => ReplAction::Exit,
            "" | "help" | "h" | "?" => ReplAction::Continue(help_text()),
            "mode" => {
                let mode = self.service.mode().toggled();
                self.service = self.service.clone().with_mode(mode);
                ReplAction::Continue(format!("Lookup mode: {mode}\n"))
            }
            "show" => {
                let snapshot = self.service.panel().snapshot().await;
                ReplAction::Continue(render_panel(&snapshot))
            }
            other => ReplAction::Continue(format!(
                "Unknown command '/{other}'. Type /help for commands.\n"
            )),
        }
    }

    async fn annotate(&self, text: &str) -> String {
        self.input.set_text(text).await;
        match self.service.annotate(&self.input).await {
            Ok(AnnotateOutcome::Applied(_)) => {
                render_panel(&self.service.panel().snapshot().await)
            }
            Ok(AnnotateOutcome::Superseded) => "(result superseded by a newer lookup)\n".to_string(),
            Err(err) => {
                let snapshot = self.service.panel().snapshot().await;
                format!("Error: {err}\n\n{}", render_panel(&snapshot))
            }
        }
    }
}

fn help_text() -> String {
    let mut out = String::from("Commands:\n");
    for (cmd, desc) in COMMANDS {
        out.push_str(&format!("  {cmd:<8} {desc}\n"));
    }
    out.push_str("Any other line is sent for annotation. Mark the target word like *this*.\n");
    out
}

fn history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".synext_history")
}

/// Execute the repl command.
///
/// The line editor blocks, so the loop runs on a blocking thread and drives
/// the async service through the runtime handle.
pub async fn execute(ctx: &CliContext, mode: AnnotationMode) -> Result<()> {
    let session = ReplSession::new(ctx, mode);
    let handle = Handle::current();
    tokio::task::spawn_blocking(move || run_blocking(session, &handle)).await?
}

fn run_blocking(mut session: ReplSession, handle: &Handle) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| CliError::Io(e.to_string()))?;

    let hist_path = history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    eprintln!("synext v{} ({} mode)", env!("CARGO_PKG_VERSION"), session.mode());
    eprintln!("Type /help for commands, /exit to quit.");

    loop {
        match rl.readline("synext> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match handle.block_on(session.handle_line(&line)) {
                    ReplAction::Continue(text) => print!("{text}"),
                    ReplAction::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => eprintln!("(Ctrl+C) Type /exit to quit."),
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::Io(err.to_string()).into()),
        }
    }

    if let Err(err) = rl.save_history(&hist_path) {
        tracing::debug!(path = %hist_path.display(), %err, "Could not save history");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::ScriptedAnnotator;
    use synext_client::AnnotatorClientConfig;
    use synext_core::{Annotation, AnnotatorError};

    fn session(annotator: ScriptedAnnotator) -> (ReplSession, Arc<ScriptedAnnotator>) {
        let annotator = Arc::new(annotator);
        let ctx = CliContext::new(annotator.clone(), AnnotatorClientConfig::default());
        (ReplSession::new(&ctx, AnnotationMode::Word), annotator)
    }

    fn text(action: ReplAction) -> String {
        match action {
            ReplAction::Continue(text) => text,
            ReplAction::Exit => panic!("unexpected exit"),
        }
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_output() {
        let (mut repl, _) = session(
            ScriptedAnnotator::new()
                .reply(Ok(Annotation::new("X", "Y")))
                .reply(Err(AnnotatorError::ShortBody { length: 1 })),
        );

        let first = text(repl.handle_line("John *likes* Mary").await);
        assert!(first.contains("  X\n"));

        let second = text(repl.handle_line("John *hates* Mary").await);
        assert!(second.starts_with("Error:"));
        assert!(second.contains("  X\n"));
        assert!(second.contains("  Y\n"));
    }

    #[tokio::test]
    async fn test_mode_toggle_reaches_requests() {
        let (mut repl, annotator) =
            session(ScriptedAnnotator::new().reply(Ok(Annotation::new("a", "b"))));

        let out = text(repl.handle_line("/mode").await);
        assert_eq!(out, "Lookup mode: sentence\n");

        repl.handle_line("John likes Mary").await;
        assert_eq!(annotator.seen()[0].mode, AnnotationMode::Sentence);
    }

    #[test]
    fn test_commands() {
        let (mut repl, annotator) = session(ScriptedAnnotator::new());

        tokio_test::block_on(async {
            assert_eq!(repl.handle_line("   ").await, ReplAction::Continue(String::new()));
            assert!(text(repl.handle_line("/help").await).contains("/show"));
            assert!(text(repl.handle_line("/show").await).contains("(empty)"));
            assert!(text(repl.handle_line("/bogus").await).contains("Unknown command"));
            assert_eq!(repl.handle_line("/exit").await, ReplAction::Exit);
        });
        assert!(annotator.seen().is_empty());
    }
}
