//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read from clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Port for the host system clipboard register
#[async_trait]
pub trait ClipboardDevice: Send + Sync {
    /// Read the current clipboard text.
    async fn get_text(&self) -> Result<String, ClipboardError>;

    /// Write text to the clipboard.
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for shared clipboard types
#[async_trait]
impl<T: ClipboardDevice + ?Sized> ClipboardDevice for std::sync::Arc<T> {
    async fn get_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().get_text().await
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardDevice for Box<dyn ClipboardDevice> {
    async fn get_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().get_text().await
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }
}
