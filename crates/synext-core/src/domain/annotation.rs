//! Annotation request and result types.
//!
//! These types cross every boundary in the workspace: the core handler
//! builds requests, the client crate turns them into URLs, and the adapters
//! render the resulting [`Annotation`].

use serde::{Deserialize, Serialize};

/// Separator the annotation service places between neighbour entries.
pub const LINE_BREAK: &str = "<br/>";

/// How the annotation service should interpret the submitted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationMode {
    /// Nearest words to the word marked with asterisks (`John *likes* Mary`).
    #[default]
    Word,
    /// Nearest sentences to the whole text.
    Sentence,
}

impl AnnotationMode {
    /// Flip between word and sentence mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Word => Self::Sentence,
            Self::Sentence => Self::Word,
        }
    }
}

impl std::fmt::Display for AnnotationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Word => f.write_str("word"),
            Self::Sentence => f.write_str("sentence"),
        }
    }
}

/// A single request to the annotation service.
///
/// The text is carried verbatim. Escaping happens only when a URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRequest {
    /// Raw text as read from the input field
    pub text: String,
    /// Word or sentence lookup
    pub mode: AnnotationMode,
}

impl AnnotationRequest {
    /// Create a word-mode request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: AnnotationMode::Word,
        }
    }

    /// Set the lookup mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: AnnotationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The word wrapped in asterisks, if the text marks one.
    ///
    /// `"John *likes* Mary"` yields `Some("likes")`. An unterminated or empty
    /// marker yields `None`.
    pub fn marked_word(&self) -> Option<&str> {
        let mut parts = self.text.splitn(3, '*');
        let _before = parts.next()?;
        let word = parts.next()?;
        parts.next()?;
        let word = word.trim();
        (!word.is_empty()).then_some(word)
    }
}

/// Result of an annotation: one entry per output region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Neighbours in the syntactic subspace (`out-text`)
    pub syntax: String,
    /// Neighbours in the raw embedding space (`out-text-baseline`)
    pub baseline: String,
}

impl Annotation {
    /// Create an annotation from its two parts.
    pub fn new(syntax: impl Into<String>, baseline: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            baseline: baseline.into(),
        }
    }

    /// Syntax neighbours, one per entry.
    pub fn syntax_lines(&self) -> Vec<&str> {
        split_lines(&self.syntax)
    }

    /// Baseline neighbours, one per entry.
    pub fn baseline_lines(&self) -> Vec<&str> {
        split_lines(&self.baseline)
    }
}

fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }
    content.split(LINE_BREAK).collect()
}
