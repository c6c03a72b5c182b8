//! Delivery chains for save and share intents.
//!
//! Every chain reports its own notices. A returned error that is not a
//! cancellation has already been shown to the user.

use bytes::Bytes;
use tracing::{debug, info, warn};

use super::cancel::{cancellable_sleep, guard_step, CancelToken};
use super::caption::{desktop_share_link, image_file_name, mobile_share_link};
use super::platform::PlatformClass;
use super::render::ImageArtifact;
use super::services::{CaptureServices, CaptureSettings};
use crate::error::CaptureError;
use crate::traits::{ShareData, ShareFile};

/// Title attached to combined file-and-text shares.
pub const SHARE_TITLE: &str = "Ihsan Reminder";

/// What the user wants done with the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureIntent {
    Save,
    Share,
}

impl CaptureIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureIntent::Save => "save",
            CaptureIntent::Share => "share",
        }
    }
}

/// How an image finally reached the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Native share sheet accepted the image (with or without text).
    Shared,
    /// File written to the download location.
    Downloaded { location: String },
    /// Both share attempts failed; the file was downloaded instead.
    DownloadedAfterShareFailure { location: String },
    /// No file share support; the file was downloaded instead.
    DownloadedUnsupported { location: String },
    /// Image shown in a new context with long-press instructions.
    ImageTab,
    /// Popup blocked; the current context shows the image.
    InlineImage,
    /// Messaging deep link opened with the caption; the image is not attached.
    MessagingLink { url: String },
    /// Desktop: file downloaded and the messaging web link opened.
    DownloadedWithLink { location: String, url: String },
}

/// One delivery attempt's collaborators and cancellation scope.
pub struct Deliverer<'a> {
    services: &'a CaptureServices,
    settings: &'a CaptureSettings,
    token: &'a CancelToken,
}

impl<'a> Deliverer<'a> {
    pub fn new(
        services: &'a CaptureServices,
        settings: &'a CaptureSettings,
        token: &'a CancelToken,
    ) -> Self {
        Self {
            services,
            settings,
            token,
        }
    }

    /// Deliver `artifact` for `intent`. `caption` is only used by shares.
    pub async fn deliver(
        &self,
        artifact: &ImageArtifact,
        intent: CaptureIntent,
        caption: &str,
    ) -> Result<Delivery, CaptureError> {
        match intent {
            CaptureIntent::Save => self.save(artifact).await,
            CaptureIntent::Share => self.share(artifact, caption).await,
        }
    }

    async fn save(&self, artifact: &ImageArtifact) -> Result<Delivery, CaptureError> {
        let notices = &self.services.notices;

        if self.services.class() == PlatformClass::ImageOnlyShare {
            let uri = artifact.data_uri();
            let opened = guard_step(
                self.token,
                "browser",
                self.settings.timeouts.delivery,
                self.services.browser.open_image_tab(&uri),
            )
            .await;
            return match opened {
                Ok(()) => {
                    notices.toast("Image Ready");
                    Ok(Delivery::ImageTab)
                }
                Err(e) if e.is_cancellation() => Err(e),
                Err(e) => {
                    debug!(error = %e, "Image tab unavailable, showing image in place");
                    self.step_navigate(&uri).await.map_err(|e| {
                        self.alert_unless_cancelled(&e, "Save failed");
                        e
                    })?;
                    notices.toast("Long Press to Save");
                    Ok(Delivery::InlineImage)
                }
            };
        }

        let location = self
            .download(artifact, &self.settings.card_file_prefix)
            .await
            .map_err(|e| {
                self.alert_unless_cancelled(&e, "Save failed");
                e
            })?;
        notices.toast("Downloaded!");
        Ok(Delivery::Downloaded { location })
    }

    async fn share(&self, artifact: &ImageArtifact, caption: &str) -> Result<Delivery, CaptureError> {
        match self.services.class() {
            PlatformClass::FileShareSheet => self.share_with_sheet(artifact, caption).await,
            PlatformClass::ImageOnlyShare => self.share_image_only(artifact, caption).await,
            PlatformClass::Desktop => self.share_desktop(artifact, caption).await,
        }
    }

    /// Full share sheet: files with text, then files alone, then download.
    async fn share_with_sheet(
        &self,
        artifact: &ImageArtifact,
        caption: &str,
    ) -> Result<Delivery, CaptureError> {
        let notices = &self.services.notices;

        if !self.services.capabilities.supports_file_share {
            let location = self.download_or_alert(artifact).await?;
            notices.alert("Sharing unavailable. Downloaded instead.");
            return Ok(Delivery::DownloadedUnsupported { location });
        }

        let file = self.share_file(artifact)?;
        let with_text = ShareData::files_only(vec![file.clone()])
            .with_title(SHARE_TITLE)
            .with_text(caption);

        match self.step_share(&with_text).await {
            Ok(()) => {
                notices.toast("Shared!");
                return Ok(Delivery::Shared);
            }
            Err(e) if e.is_cancellation() => return Err(e),
            Err(e) => info!(error = %e, "Share with text failed, retrying with image only"),
        }

        // The retry succeeds quietly.
        match self.step_share(&ShareData::files_only(vec![file])).await {
            Ok(()) => Ok(Delivery::Shared),
            Err(e) if e.is_cancellation() => Err(e),
            Err(e) => {
                warn!(error = %e, "Image-only share failed, downloading instead");
                let location = self.download_or_alert(artifact).await?;
                notices.alert("Share failed. Image downloaded.");
                Ok(Delivery::DownloadedAfterShareFailure { location })
            }
        }
    }

    /// Image-only share sheet, then the messaging deep link.
    async fn share_image_only(
        &self,
        artifact: &ImageArtifact,
        caption: &str,
    ) -> Result<Delivery, CaptureError> {
        if self.services.capabilities.supports_file_share {
            let data = ShareData::files_only(vec![self.share_file(artifact)?]);
            match self.step_share(&data).await {
                Ok(()) => {
                    self.services.notices.toast("Paste caption in chat!");
                    return Ok(Delivery::Shared);
                }
                Err(e) if e.is_cancellation() => return Err(e),
                Err(e) => info!(error = %e, "Image share failed, opening messaging link"),
            }
        }

        // The image is lost here; the caption is already on the clipboard.
        let url = mobile_share_link(caption);
        self.step_navigate(&url).await.map_err(|e| {
            self.alert_unless_cancelled(&e, "Share failed");
            e
        })?;
        Ok(Delivery::MessagingLink { url })
    }

    /// Download, then open the messaging web link once the download settled.
    async fn share_desktop(
        &self,
        artifact: &ImageArtifact,
        caption: &str,
    ) -> Result<Delivery, CaptureError> {
        let location = self
            .download(artifact, &self.settings.share_file_prefix)
            .await
            .map_err(|e| {
                self.alert_unless_cancelled(&e, "Share failed");
                e
            })?;
        self.services.notices.toast("Image saved!");

        cancellable_sleep(self.token, self.settings.desktop_link_delay).await?;

        let url = desktop_share_link(caption);
        let opened = guard_step(
            self.token,
            "browser",
            self.settings.timeouts.delivery,
            self.services.browser.open_new_tab(&url),
        )
        .await;
        match opened {
            Ok(()) => {}
            Err(e) if e.is_cancellation() => return Err(e),
            // The image is saved; a missing browser is not worth an alert.
            Err(e) => warn!(error = %e, "Could not open messaging link"),
        }
        Ok(Delivery::DownloadedWithLink { location, url })
    }

    fn share_file(&self, artifact: &ImageArtifact) -> Result<ShareFile, CaptureError> {
        let name = image_file_name(&self.settings.share_file_prefix, self.services.clock.now_millis());
        let bytes = artifact.png_bytes().map_err(|e| {
            self.services.notices.alert(&format!("Share failed: {}", e));
            e
        })?;
        Ok(ShareFile::png(name, bytes))
    }

    async fn step_share(&self, data: &ShareData) -> Result<(), CaptureError> {
        guard_step(
            self.token,
            "share",
            self.settings.timeouts.share,
            self.services.share_sheet.share(data),
        )
        .await
    }

    async fn step_navigate(&self, url: &str) -> Result<(), CaptureError> {
        guard_step(
            self.token,
            "browser",
            self.settings.timeouts.delivery,
            self.services.browser.navigate(url),
        )
        .await
    }

    async fn download(&self, artifact: &ImageArtifact, prefix: &str) -> Result<String, CaptureError> {
        let bytes: Bytes = artifact.png_bytes()?;
        let name = image_file_name(prefix, self.services.clock.now_millis());
        let location = guard_step(
            self.token,
            "download",
            self.settings.timeouts.delivery,
            self.services.downloader.download(&bytes, &name),
        )
        .await?;
        info!(location = %location, "Image downloaded");
        Ok(location)
    }

    /// Fallback download inside a share chain.
    async fn download_or_alert(&self, artifact: &ImageArtifact) -> Result<String, CaptureError> {
        self.download(artifact, &self.settings.share_file_prefix)
            .await
            .map_err(|e| {
                self.alert_unless_cancelled(&e, "Share failed");
                e
            })
    }

    fn alert_unless_cancelled(&self, err: &CaptureError, prefix: &str) {
        if err.is_cancellation() {
            return;
        }
        warn!(error = %err, code = err.error_code(), "Delivery exhausted");
        self.services.notices.alert(&format!("{}: {}", prefix, err));
    }
}
