//! Application services that orchestrate ports and the page model.

mod annotate;

pub use annotate::{AnnotateOutcome, AnnotateService};
