//! Input sources the annotate handler reads from.

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Something that holds the text to annotate.
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Current value of the input field.
    async fn read_text(&self) -> String;
}

/// A fixed input value, e.g. a command-line argument.
#[derive(Debug, Clone)]
pub struct StaticInput(String);

impl StaticInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[async_trait]
impl InputSource for StaticInput {
    async fn read_text(&self) -> String {
        self.0.clone()
    }
}

/// An editable input field shared between a writer and the handler.
#[derive(Debug, Default)]
pub struct SharedInput {
    value: RwLock<String>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field's value.
    pub async fn set_text(&self, text: impl Into<String>) {
        *self.value.write().await = text.into();
    }
}

#[async_trait]
impl InputSource for SharedInput {
    async fn read_text(&self) -> String {
        self.value.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_input() {
        let input = StaticInput::new("John likes Mary");
        assert_eq!(tokio_test::block_on(input.read_text()), "John likes Mary");
    }

    #[tokio::test]
    async fn test_shared_input_reflects_latest_value() {
        let input = SharedInput::new();
        assert_eq!(input.read_text().await, "");

        input.set_text("first").await;
        input.set_text("second").await;
        assert_eq!(input.read_text().await, "second");
    }
}
