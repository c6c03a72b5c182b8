//! Platform capabilities and the delivery class derived from them.
//!
//! The host resolves [`PlatformCapabilities`] once at startup; nothing in
//! the pipeline inspects platform identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::traits::RasterStrategy;

/// What the host environment can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    /// A native share sheet accepts files.
    pub supports_file_share: bool,
    /// Rasterization strategy that works reliably on this engine.
    pub preferred_raster_strategy: RasterStrategy,
    /// Touch is the primary input (phone or tablet).
    pub is_touch_primary: bool,
}

impl PlatformCapabilities {
    /// Desktop browser or native desktop host.
    pub fn desktop() -> Self {
        Self {
            supports_file_share: false,
            preferred_raster_strategy: RasterStrategy::Canvas,
            is_touch_primary: false,
        }
    }

    /// Touch device whose engine needs foreign-object rasterization and
    /// cannot share text together with files.
    pub fn image_only_share(supports_file_share: bool) -> Self {
        Self {
            supports_file_share,
            preferred_raster_strategy: RasterStrategy::ForeignObject,
            is_touch_primary: true,
        }
    }

    /// Touch device with a full share sheet.
    pub fn file_share_sheet(supports_file_share: bool) -> Self {
        Self {
            supports_file_share,
            preferred_raster_strategy: RasterStrategy::Canvas,
            is_touch_primary: true,
        }
    }

    pub fn class(&self) -> PlatformClass {
        PlatformClass::from_capabilities(self)
    }
}

/// Three-way split driving save and share behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformClass {
    /// Touch-primary, foreign-object rendering, image-only shares.
    ImageOnlyShare,
    /// Touch-primary with a file-capable share sheet.
    FileShareSheet,
    /// Everything else.
    Desktop,
}

impl PlatformClass {
    pub fn from_capabilities(caps: &PlatformCapabilities) -> Self {
        match (caps.is_touch_primary, caps.preferred_raster_strategy) {
            (false, _) => PlatformClass::Desktop,
            (true, RasterStrategy::ForeignObject) => PlatformClass::ImageOnlyShare,
            (true, RasterStrategy::Canvas) => PlatformClass::FileShareSheet,
        }
    }

    /// Mobile classes use the mobile messaging deep link.
    pub fn is_mobile(&self) -> bool {
        !matches!(self, PlatformClass::Desktop)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformClass::ImageOnlyShare => "image_only_share",
            PlatformClass::FileShareSheet => "file_share_sheet",
            PlatformClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for PlatformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
