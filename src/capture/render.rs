//! Card rendering: rasterize, flatten, PNG-encode.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bytes::Bytes;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::cancel::{guard_step, CancelToken};
use super::card::CardNode;
use super::services::CaptureSettings;
use crate::error::CaptureError;
use crate::traits::{RasterImage, RasterOptions, Rasterizer};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Output form requested from [`render_card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Blob,
    DataUri,
}

/// A rendered PNG.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageArtifact {
    Blob(Bytes),
    DataUri(String),
}

impl ImageArtifact {
    fn from_png(png: Vec<u8>, format: ImageFormat) -> Self {
        match format {
            ImageFormat::Blob => ImageArtifact::Blob(Bytes::from(png)),
            ImageFormat::DataUri => ImageArtifact::DataUri(png_data_uri(&png)),
        }
    }

    /// PNG bytes, decoding a data URI when needed.
    pub fn png_bytes(&self) -> Result<Bytes, CaptureError> {
        match self {
            ImageArtifact::Blob(bytes) => Ok(bytes.clone()),
            ImageArtifact::DataUri(uri) => {
                let encoded = uri
                    .strip_prefix(PNG_DATA_URI_PREFIX)
                    .ok_or_else(|| CaptureError::Encode("not a PNG data URI".to_string()))?;
                BASE64
                    .decode(encoded)
                    .map(Bytes::from)
                    .map_err(|e| CaptureError::Encode(e.to_string()))
            }
        }
    }

    /// `data:image/png;base64,...` form.
    pub fn data_uri(&self) -> String {
        match self {
            ImageArtifact::Blob(bytes) => png_data_uri(bytes),
            ImageArtifact::DataUri(uri) => uri.clone(),
        }
    }
}

pub fn png_data_uri(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, BASE64.encode(png))
}

/// Composite RGBA pixels over an opaque background color.
pub fn flatten_onto(image: &RasterImage, background: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.rgba.len());
    for px in image.rgba.chunks_exact(4) {
        let alpha = px[3] as u32;
        for channel in 0..3 {
            let src = px[channel] as u32;
            let bg = background[channel] as u32;
            out.push(((src * alpha + bg * (255 - alpha) + 127) / 255) as u8);
        }
        out.push(255);
    }
    out
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_rgba_to_png(rgba: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, CaptureError> {
    use image::{ImageBuffer, RgbaImage};

    let img: RgbaImage = ImageBuffer::from_raw(width, height, rgba)
        .ok_or_else(|| CaptureError::Encode("Invalid RGBA buffer dimensions".into()))?;

    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    img.write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| CaptureError::Encode(e.to_string()))?;

    Ok(buf)
}

/// First 8 hex characters of the SHA-256 hash, for log lines.
pub fn compute_short_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(&result[..4])
}

/// Render `card` with `rasterizer`.
///
/// Waits for fonts, prunes excluded nodes, rasterizes, flattens onto the
/// background and PNG-encodes. Every suspension point honours `token` and
/// the configured timeouts.
pub async fn render_card(
    rasterizer: &dyn Rasterizer,
    card: &CardNode,
    format: ImageFormat,
    settings: &CaptureSettings,
    token: &CancelToken,
) -> Result<ImageArtifact, CaptureError> {
    let timeouts = &settings.timeouts;
    guard_step(token, "fonts", timeouts.fonts, rasterizer.fonts_ready()).await?;

    let pruned = card.without_excluded(&settings.exclude_marker);
    let options = RasterOptions::for_strategy(
        rasterizer.strategy(),
        settings.background,
        settings.exclude_marker.clone(),
    );
    let raster = guard_step(
        token,
        "rasterize",
        timeouts.rasterize,
        rasterizer.rasterize(&pruned, &options),
    )
    .await?;

    if !raster.is_consistent() {
        return Err(CaptureError::Encode(format!(
            "{}x{} image with {} bytes",
            raster.width,
            raster.height,
            raster.rgba.len()
        )));
    }

    let background = settings.background;
    let png = tokio::task::spawn_blocking(move || {
        let flat = flatten_onto(&raster, background);
        encode_rgba_to_png(flat, raster.width, raster.height)
    })
    .await
    .map_err(|e| CaptureError::Encode(e.to_string()))??;

    debug!(
        strategy = rasterizer.strategy().as_str(),
        bytes = png.len(),
        hash = %compute_short_hash(&png),
        "Card rendered"
    );
    Ok(ImageArtifact::from_png(png, format))
}
