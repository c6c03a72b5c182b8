//! Browser adapter using the OS default handlers.
//!
//! URLs go through `webbrowser`. Data URIs cannot be handed to a browser
//! from the command line, so they are written out as files first and opened
//! with `open`.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::traits::{image_viewer_html, Browser, DeliveryError};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// [`Browser`] backed by the system browser.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    /// Where viewer pages and decoded images are written.
    scratch_dir: PathBuf,
    background: String,
}

impl SystemBrowser {
    pub fn new(scratch_dir: impl Into<PathBuf>, background: impl Into<String>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            background: background.into(),
        }
    }

    async fn write_scratch(&self, name: &str, contents: &[u8]) -> Result<PathBuf, DeliveryError> {
        tokio::fs::create_dir_all(&self.scratch_dir).await?;
        let path = self.scratch_dir.join(name);
        tokio::fs::write(&path, contents).await?;
        Ok(path)
    }

    async fn open_path(path: &Path) -> Result<(), DeliveryError> {
        let target = path.to_path_buf();
        tokio::task::spawn_blocking(move || open::that(&target))
            .await
            .map_err(|e| DeliveryError::OpenFailed {
                target: path.display().to_string(),
                message: e.to_string(),
            })?
            .map_err(|e| DeliveryError::OpenFailed {
                target: path.display().to_string(),
                message: e.to_string(),
            })
    }

    async fn open_url(url: &str) -> Result<(), DeliveryError> {
        let owned = url.to_string();
        let result = tokio::task::spawn_blocking(move || webbrowser::open(&owned))
            .await
            .map_err(|e| e.to_string())
            .and_then(|r| r.map_err(|e| e.to_string()));
        result.map_err(|message| DeliveryError::OpenFailed {
            target: url.to_string(),
            message,
        })
    }
}

#[async_trait]
impl Browser for SystemBrowser {
    async fn open_image_tab(&self, data_uri: &str) -> Result<(), DeliveryError> {
        let html = image_viewer_html(data_uri, &self.background);
        let page = self.write_scratch("ihsan-viewer.html", html.as_bytes()).await?;
        debug!(page = %page.display(), "Opening image viewer");
        // A desktop without any handler is the closest thing to a blocked popup.
        Self::open_path(&page)
            .await
            .map_err(|_| DeliveryError::PopupBlocked)
    }

    async fn navigate(&self, url: &str) -> Result<(), DeliveryError> {
        match url.strip_prefix(PNG_DATA_URI_PREFIX) {
            Some(encoded) => {
                let png = BASE64.decode(encoded).map_err(|e| DeliveryError::OpenFailed {
                    target: "data URI".to_string(),
                    message: e.to_string(),
                })?;
                let path = self.write_scratch("ihsan-image.png", &png).await?;
                Self::open_path(&path).await
            }
            None => Self::open_url(url).await,
        }
    }

    async fn open_new_tab(&self, url: &str) -> Result<(), DeliveryError> {
        Self::open_url(url).await
    }
}
