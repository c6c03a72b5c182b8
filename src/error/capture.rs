//! Capture pipeline error types.

use thiserror::Error;

use crate::traits::{ClipboardError, DeliveryError, RasterError, ShareError};

/// A failure at one suspension point of a capture-and-share invocation.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Rasterization strategy threw.
    #[error("{0}")]
    Raster(#[from] RasterError),

    /// Pixels could not be encoded to PNG.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Native share call failed (cancellation included).
    #[error("{0}")]
    Share(#[from] ShareError),

    /// Clipboard write failed.
    #[error("{0}")]
    Clipboard(#[from] ClipboardError),

    /// Download or browser navigation failed.
    #[error("{0}")]
    Delivery(#[from] DeliveryError),

    /// A step exceeded its configured timeout.
    #[error("{step} timed out after {after_ms} ms")]
    TimedOut { step: &'static str, after_ms: u64 },

    /// The invocation's cancellation token fired.
    #[error("capture cancelled")]
    Cancelled,
}

impl CaptureError {
    /// True for explicit user aborts: token cancellation or a dismissed
    /// share dialog.
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            CaptureError::Cancelled | CaptureError::Share(ShareError::Cancelled)
        )
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CaptureError::Raster(_) => "E_CAP_RASTER",
            CaptureError::Encode(_) => "E_CAP_ENCODE",
            CaptureError::Share(ShareError::Cancelled) => "E_CAP_SHARE_ABORT",
            CaptureError::Share(_) => "E_CAP_SHARE",
            CaptureError::Clipboard(_) => "E_CAP_CLIPBOARD",
            CaptureError::Delivery(_) => "E_CAP_DELIVERY",
            CaptureError::TimedOut { .. } => "E_CAP_TIMEOUT",
            CaptureError::Cancelled => "E_CAP_CANCELLED",
        }
    }
}
