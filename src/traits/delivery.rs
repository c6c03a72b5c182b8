//! Delivery channel abstractions: file download and browser contexts.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Delivery channel errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// A new browser context could not be created
    #[error("Popup blocked")]
    PopupBlocked,
    /// Writing the downloaded file failed
    #[error("Download failed: {0}")]
    Io(String),
    /// Opening a URL or file failed
    #[error("Could not open {target}: {message}")]
    OpenFailed { target: String, message: String },
}

impl From<std::io::Error> for DeliveryError {
    fn from(err: std::io::Error) -> Self {
        DeliveryError::Io(err.to_string())
    }
}

/// Saves bytes as a user-visible download.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Trigger a download of `bytes` named `file_name`.
    ///
    /// Returns where the file ended up, for logging.
    async fn download(&self, bytes: &Bytes, file_name: &str) -> Result<String, DeliveryError>;
}

/// Browser navigation surface.
#[async_trait]
pub trait Browser: Send + Sync {
    /// Open a new context showing the image with long-press-to-save
    /// instructions. Fails with [`DeliveryError::PopupBlocked`] when the
    /// context cannot be created.
    async fn open_image_tab(&self, data_uri: &str) -> Result<(), DeliveryError>;

    /// Navigate the current context to `url`.
    async fn navigate(&self, url: &str) -> Result<(), DeliveryError>;

    /// Open `url` in a new context.
    async fn open_new_tab(&self, url: &str) -> Result<(), DeliveryError>;
}

/// Page shown by [`Browser::open_image_tab`].
pub fn image_viewer_html(data_uri: &str, background: &str) -> String {
    format!(
        "<html><body style=\"margin:0;background:{bg};display:flex;flex-direction:column;\
align-items:center;justify-content:center;min-height:100vh;\">\
<img src=\"{src}\" style=\"max-width:90%;border-radius:12px;\"/>\
<div style=\"margin-top:20px;color:white;font-family:system-ui;padding:10px;\">\
Long Press Image to Save 📸</div></body></html>",
        bg = background,
        src = data_uri
    )
}
