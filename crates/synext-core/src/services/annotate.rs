//! Annotate service - the handler behind the "Annotate" button.
//!
//! One invocation reads the input, asks the annotator for both outputs and
//! writes them to the panel in a single step. Failures leave the panel as it
//! was. Overlapping invocations are not serialized; the panel's tickets make
//! sure an older response never overwrites a newer one.

use std::sync::Arc;

use crate::domain::{Annotation, AnnotationMode, AnnotationRequest};
use crate::page::{InputSource, OutputPanel};
use crate::ports::{AnnotatorPort, AnnotatorResult};

/// What happened to a successful annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotateOutcome {
    /// Both regions now show this annotation.
    Applied(Annotation),
    /// A later invocation already wrote the panel; this result was dropped.
    Superseded,
}

impl AnnotateOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Service wiring an annotator to an output panel.
#[derive(Clone)]
pub struct AnnotateService {
    annotator: Arc<dyn AnnotatorPort>,
    panel: Arc<OutputPanel>,
    mode: AnnotationMode,
}

impl AnnotateService {
    /// Create a word-mode service writing to `panel`.
    pub fn new(annotator: Arc<dyn AnnotatorPort>, panel: Arc<OutputPanel>) -> Self {
        Self {
            annotator,
            panel,
            mode: AnnotationMode::Word,
        }
    }

    /// Set the lookup mode used for every invocation.
    #[must_use]
    pub const fn with_mode(mut self, mode: AnnotationMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn mode(&self) -> AnnotationMode {
        self.mode
    }

    /// The panel this service writes to.
    pub fn panel(&self) -> &Arc<OutputPanel> {
        &self.panel
    }

    /// Run one annotate invocation against `input`.
    pub async fn annotate(&self, input: &dyn InputSource) -> AnnotatorResult<AnnotateOutcome> {
        let text = input.read_text().await;
        let ticket = self.panel.issue_ticket();
        let request = AnnotationRequest::new(text).with_mode(self.mode);

        if request.mode == AnnotationMode::Word && request.marked_word().is_none() {
            tracing::debug!(%ticket, "Word mode request has no *marked* word");
        }

        let annotation = match self.annotator.annotate(&request).await {
            Ok(annotation) => annotation,
            Err(e) => {
                tracing::warn!(%ticket, error = %e, "Annotation failed; outputs left unchanged");
                return Err(e);
            }
        };

        if self.panel.apply(ticket, &annotation).await {
            tracing::debug!(%ticket, mode = %self.mode, "Annotation applied");
            Ok(AnnotateOutcome::Applied(annotation))
        } else {
            tracing::debug!(%ticket, "Ignoring stale annotation (newer result already shown)");
            Ok(AnnotateOutcome::Superseded)
        }
    }
}
