//! Command handlers.
//!
//! Each handler takes the [`CliContext`](crate::bootstrap::CliContext),
//! drives an `AnnotateService` and formats the result for the terminal.

pub mod annotate;
pub mod repl;
pub mod web;
