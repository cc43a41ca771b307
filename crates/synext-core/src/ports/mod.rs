//! Port definitions for the annotation backend.
//!
//! The core domain talks to the annotation service only through
//! [`AnnotatorPort`]. The HTTP implementation lives in `synext-client`.

mod annotator;
mod error;

pub use annotator::AnnotatorPort;
#[cfg(test)]
pub use annotator::MockAnnotatorPort;
pub use error::{AnnotatorError, AnnotatorResult};
