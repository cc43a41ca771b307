//! Page model: one input field and two output regions.
//!
//! The element ids match the demo page so adapters can refer to regions by
//! the same names the browser uses.

mod input;
mod panel;

pub use input::{InputSource, SharedInput, StaticInput};
pub use panel::{OutputPanel, PanelSnapshot, Ticket};

/// Id of the text input element.
pub const INPUT_ELEMENT_ID: &str = "text";

/// Id of the region showing syntax-space neighbours.
pub const SYNTAX_ELEMENT_ID: &str = "out-text";

/// Id of the region showing baseline neighbours.
pub const BASELINE_ELEMENT_ID: &str = "out-text-baseline";
