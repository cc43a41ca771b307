//! One-shot annotate command.

use std::sync::Arc;

use anyhow::Result;
use synext_core::{AnnotationMode, AnnotateService, PanelSnapshot, StaticInput};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_panel;

/// Run one invocation against a fresh panel and return its contents.
///
/// # Errors
///
/// Annotator failures are mapped to [`CliError`]; the panel is left empty.
pub async fn run(
    ctx: &CliContext,
    text: &str,
    mode: AnnotationMode,
) -> Result<PanelSnapshot, CliError> {
    let service = AnnotateService::new(Arc::clone(&ctx.annotator), ctx.new_panel()).with_mode(mode);
    service.annotate(&StaticInput::new(text)).await?;
    Ok(service.panel().snapshot().await)
}

/// Execute the annotate command and print both regions.
pub async fn execute(ctx: &CliContext, text: &str, mode: AnnotationMode, json: bool) -> Result<()> {
    let snapshot = run(ctx, text, mode).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_panel(&snapshot));
    }
    Ok(())
}
