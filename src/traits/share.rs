//! Native share sheet trait abstraction.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// A file attached to a share request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ShareFile {
    pub fn png(name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            mime_type: "image/png".to_string(),
            bytes,
        }
    }
}

/// Payload of a native share invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareData {
    pub files: Vec<ShareFile>,
    pub title: Option<String>,
    pub text: Option<String>,
}

impl ShareData {
    /// Share files only, without text. Avoids engines that drop one of the
    /// two when both are present.
    pub fn files_only(files: Vec<ShareFile>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some() || self.title.is_some()
    }
}

/// Share sheet errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShareError {
    /// The user dismissed the share dialog. Never reported as a failure.
    #[error("Share cancelled")]
    Cancelled,
    /// The platform refused the payload
    #[error("Share not supported: {0}")]
    Unsupported(String),
    /// Any other rejection
    #[error("Share failed: {0}")]
    Failed(String),
}

/// Platform-native share sheet.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    async fn share(&self, data: &ShareData) -> Result<(), ShareError>;
}
