#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod page;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Annotation, AnnotationMode, AnnotationRequest, LINE_BREAK};
pub use page::{
    BASELINE_ELEMENT_ID, INPUT_ELEMENT_ID, InputSource, OutputPanel, PanelSnapshot,
    SYNTAX_ELEMENT_ID, SharedInput, StaticInput, Ticket,
};
pub use ports::{AnnotatorError, AnnotatorPort, AnnotatorResult};
pub use services::{AnnotateOutcome, AnnotateService};
