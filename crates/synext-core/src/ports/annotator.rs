//! Annotation backend port trait.

use async_trait::async_trait;

use super::error::AnnotatorResult;
use crate::domain::{Annotation, AnnotationRequest};

/// Port trait for syntactic annotation backends.
///
/// # Design
///
/// - Uses core-owned types, not wire formats
/// - Returns `AnnotatorError` for all failures
/// - Implementations must not touch output regions; the handler owns them
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnotatorPort: Send + Sync {
    /// Annotate the request's text and return both output parts.
    async fn annotate(&self, request: &AnnotationRequest) -> AnnotatorResult<Annotation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn AnnotatorPort>) {}

    #[tokio::test]
    async fn test_mock_port_returns_annotation() {
        let mut mock = MockAnnotatorPort::new();
        mock.expect_annotate()
            .withf(|request| request.text == "John likes Mary")
            .times(1)
            .returning(|_| Ok(Annotation::new("X", "Y")));

        let annotation = mock
            .annotate(&AnnotationRequest::new("John likes Mary"))
            .await
            .unwrap();
        assert_eq!(annotation, Annotation::new("X", "Y"));
    }
}
