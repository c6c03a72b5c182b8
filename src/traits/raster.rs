//! Rasterization trait abstraction.
//!
//! Two rasterization strategies exist because neither is reliable on every
//! browser engine. The host injects one [`Rasterizer`] per strategy and the
//! capture pipeline picks between them using the platform capabilities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capture::CardNode;

/// Which rasterization approach a [`Rasterizer`] implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterStrategy {
    /// SVG foreign-object serialization. Used where canvas drawing is
    /// unreliable.
    ForeignObject,
    /// Canvas-drawing rasterization. Higher density, CORS image loading.
    Canvas,
}

impl RasterStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RasterStrategy::ForeignObject => "foreign_object",
            RasterStrategy::Canvas => "canvas",
        }
    }
}

/// Options handed to a rasterizer for one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    /// Fill color as `[r, g, b]`, painted under the card.
    pub background: [u8; 3],
    /// Device-pixel multiplier.
    pub pixel_ratio: u32,
    /// Attribute marking nodes that must not appear in the capture.
    pub exclude_marker: String,
    /// Load cross-origin images with CORS.
    pub cors: bool,
    /// Bypass the host's resource cache for embedded images.
    pub cache_bust: bool,
}

impl RasterOptions {
    /// Options used for a strategy.
    ///
    /// Foreign-object captures run at 2x without CORS and bypass the image
    /// cache; canvas captures run at 3x with CORS loading.
    pub fn for_strategy(
        strategy: RasterStrategy,
        background: [u8; 3],
        exclude_marker: impl Into<String>,
    ) -> Self {
        let (pixel_ratio, cors, cache_bust) = match strategy {
            RasterStrategy::ForeignObject => (2, false, true),
            RasterStrategy::Canvas => (3, true, false),
        };
        Self {
            background,
            pixel_ratio,
            exclude_marker: exclude_marker.into(),
            cors,
            cache_bust,
        }
    }
}

/// Raw RGBA8 pixels produced by a rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self { width, height, rgba }
    }

    /// Image of a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut buf = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            buf.extend_from_slice(&rgba);
        }
        Self::new(width, height, buf)
    }

    /// Check that the buffer length matches the dimensions.
    pub fn is_consistent(&self) -> bool {
        self.rgba.len() == (self.width as usize) * (self.height as usize) * 4
    }
}

/// Rasterization errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RasterError {
    /// The strategy threw; message is shown to the user as-is
    #[error("{0}")]
    Failed(String),
    /// Web fonts never finished loading
    #[error("Fonts failed to load: {0}")]
    Fonts(String),
    /// The rasterizer returned a buffer that does not match its dimensions
    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

/// Converts a card into pixels.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Strategy this rasterizer implements.
    fn strategy(&self) -> RasterStrategy;

    /// Resolve once web fonts have loaded, so layout does not shift mid-capture.
    async fn fonts_ready(&self) -> Result<(), RasterError> {
        Ok(())
    }

    /// Rasterize the card. Nodes carrying `options.exclude_marker` have
    /// already been pruned by the caller.
    async fn rasterize(
        &self,
        card: &CardNode,
        options: &RasterOptions,
    ) -> Result<RasterImage, RasterError>;
}
