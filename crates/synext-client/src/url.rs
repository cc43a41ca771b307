//! URL construction for the annotation endpoint.
//!
//! The query value is always percent-encoded, so user text cannot inject
//! extra parameters or break the URL.

use synext_core::{AnnotationMode, AnnotationRequest};
use url::Url;

use crate::models::EndpointConfig;

/// Query parameter carrying the text.
const TEXT_PARAM: &str = "text";

/// Query parameter switching the service to sentence lookups.
const SENTENCE_PARAM: &str = "sentence_based";

/// Build the GET URL for an annotation request.
///
/// Parameters are appended after any query the endpoint already carries.
pub fn build_annotate_url(config: &EndpointConfig, request: &AnnotationRequest) -> Url {
    let mut url = config.base_url.clone();

    let mut query = format!("{TEXT_PARAM}={}", urlencoding::encode(&request.text));
    if request.mode == AnnotationMode::Sentence {
        query.push_str(&format!("&{SENTENCE_PARAM}=1"));
    }

    let combined = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
        _ => query,
    };
    url.set_query(Some(&combined));

    url
}
