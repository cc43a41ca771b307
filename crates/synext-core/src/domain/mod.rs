//! Domain types for syntactic annotation.

mod annotation;

pub use annotation::{Annotation, AnnotationMode, AnnotationRequest, LINE_BREAK};
