//! Clipboard trait abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, denied permission)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The write was rejected
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Text clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
