//! Rasterizer reading a snapshot rendered by the host.
//!
//! The host's renderer (webview, headless browser, design tool) writes the
//! card to an image file; this adapter decodes it into RGBA pixels. Any
//! format `image` can sniff is accepted.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::capture::CardNode;
use crate::traits::{RasterError, RasterImage, RasterOptions, RasterStrategy, Rasterizer};

/// [`Rasterizer`] decoding a pre-rendered snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotRasterizer {
    path: PathBuf,
    strategy: RasterStrategy,
}

impl SnapshotRasterizer {
    pub fn new(path: impl Into<PathBuf>, strategy: RasterStrategy) -> Self {
        Self {
            path: path.into(),
            strategy,
        }
    }
}

#[async_trait]
impl Rasterizer for SnapshotRasterizer {
    fn strategy(&self) -> RasterStrategy {
        self.strategy
    }

    async fn fonts_ready(&self) -> Result<(), RasterError> {
        // Snapshot files are complete once written.
        Ok(())
    }

    async fn rasterize(
        &self,
        _card: &CardNode,
        _options: &RasterOptions,
    ) -> Result<RasterImage, RasterError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            RasterError::Failed(format!("{}: {}", self.path.display(), e))
        })?;
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| RasterError::Failed(e.to_string()))?
            .map_err(|e| RasterError::InvalidImage(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(RasterImage::new(width, height, rgba.into_raw()))
    }
}
