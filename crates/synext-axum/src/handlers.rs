//! Request handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use synext_core::{Annotation, AnnotationMode, AnnotationRequest};

use crate::error::HttpError;
use crate::page::INDEX_HTML;
use crate::state::AppState;

/// Query string of `/api/annotate`.
#[derive(Debug, Deserialize)]
pub struct AnnotateQuery {
    /// Text to annotate; may be empty but must be present
    pub text: Option<String>,
    /// Any non-empty value selects sentence mode
    pub sentence_based: Option<String>,
}

impl AnnotateQuery {
    fn mode(&self) -> AnnotationMode {
        match self.sentence_based.as_deref() {
            Some(flag) if !flag.is_empty() => AnnotationMode::Sentence,
            _ => AnnotationMode::Word,
        }
    }
}

/// Serve the demo page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// Forward one annotation request to the upstream service.
pub async fn annotate(
    State(state): State<AppState>,
    Query(query): Query<AnnotateQuery>,
) -> Result<Json<Annotation>, HttpError> {
    let mode = query.mode();
    let text = query
        .text
        .ok_or_else(|| HttpError::BadRequest("missing 'text' query parameter".to_string()))?;

    let request = AnnotationRequest::new(text).with_mode(mode);
    match state.annotator.annotate(&request).await {
        Ok(annotation) => Ok(Json(annotation)),
        Err(e) => {
            tracing::warn!(error = %e, %mode, "Upstream annotation failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(sentence_based: Option<&str>) -> AnnotateQuery {
        AnnotateQuery {
            text: Some("x".to_string()),
            sentence_based: sentence_based.map(str::to_string),
        }
    }

    #[test]
    fn test_sentence_flag_truthiness() {
        assert_eq!(query(None).mode(), AnnotationMode::Word);
        assert_eq!(query(Some("")).mode(), AnnotationMode::Word);
        assert_eq!(query(Some("1")).mode(), AnnotationMode::Sentence);
        assert_eq!(query(Some("true")).mode(), AnnotationMode::Sentence);
    }
}
