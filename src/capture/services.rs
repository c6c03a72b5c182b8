//! Collaborators and settings shared by every capture invocation.

use std::sync::Arc;
use std::time::Duration;

use super::platform::{PlatformCapabilities, PlatformClass};
use crate::config::{IhsanConfig, Timeouts};
use crate::error::ConfigError;
use crate::traits::{
    Browser, Clipboard, Clock, Downloader, NoticeSink, RasterStrategy, Rasterizer, ShareSheet,
};

/// Injected collaborators for the capture pipeline.
#[derive(Clone)]
pub struct CaptureServices {
    pub capabilities: PlatformCapabilities,
    pub foreign_object: Arc<dyn Rasterizer>,
    pub canvas: Arc<dyn Rasterizer>,
    pub share_sheet: Arc<dyn ShareSheet>,
    pub clipboard: Arc<dyn Clipboard>,
    pub downloader: Arc<dyn Downloader>,
    pub browser: Arc<dyn Browser>,
    pub notices: Arc<dyn NoticeSink>,
    pub clock: Arc<dyn Clock>,
}

impl CaptureServices {
    pub fn class(&self) -> PlatformClass {
        self.capabilities.class()
    }

    /// Rasterizer for the platform's preferred strategy.
    pub fn rasterizer(&self) -> &Arc<dyn Rasterizer> {
        match self.capabilities.preferred_raster_strategy {
            RasterStrategy::ForeignObject => &self.foreign_object,
            RasterStrategy::Canvas => &self.canvas,
        }
    }
}

impl std::fmt::Debug for CaptureServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureServices")
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// Values from [`IhsanConfig`] the pipeline reads.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSettings {
    pub background: [u8; 3],
    /// Same color as `#RRGGBB`, for the image viewer page.
    pub background_hex: String,
    pub exclude_marker: String,
    pub card_file_prefix: String,
    pub share_file_prefix: String,
    pub app_url: String,
    pub desktop_link_delay: Duration,
    pub timeouts: Timeouts,
}

impl CaptureSettings {
    pub fn from_config(config: &IhsanConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            background: config.background_rgb()?,
            background_hex: config.background_color.clone(),
            exclude_marker: config.exclude_marker.clone(),
            card_file_prefix: config.card_file_prefix.clone(),
            share_file_prefix: config.share_file_prefix.clone(),
            app_url: config.app_url.clone(),
            desktop_link_delay: config.desktop_link_delay,
            timeouts: config.timeouts.clone(),
        })
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        let config = IhsanConfig::default();
        Self {
            background: [0x0F, 0x20, 0x27],
            background_hex: config.background_color,
            exclude_marker: config.exclude_marker,
            card_file_prefix: config.card_file_prefix,
            share_file_prefix: config.share_file_prefix,
            app_url: config.app_url,
            desktop_link_delay: config.desktop_link_delay,
            timeouts: config.timeouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_default_config_match_default() {
        let settings = CaptureSettings::from_config(&IhsanConfig::default()).unwrap();
        assert_eq!(settings, CaptureSettings::default());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let mut config = IhsanConfig::default();
        config.background_color = "teal".to_string();
        assert!(CaptureSettings::from_config(&config).is_err());
    }
}
