//! Runtime configuration.
//!
//! Resolution order: built-in defaults, then `config.toml` in the data
//! directory (`~/.ihsan`, or `IHSAN_DATA_DIR`) when it exists, then
//! `IHSAN_*` environment variables.
//!
//! # Example
//!
//! ```ignore
//! use ihsan::config::{DayBoundary, IhsanConfig};
//!
//! let config = IhsanConfig::default()
//!     .with_day_boundary(DayBoundary::Utc)
//!     .with_app_url("https://example.org");
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Directory under the home directory holding data and config.
const DATA_DIR_NAME: &str = ".ihsan";

/// Config file name inside the data directory.
const CONFIG_FILE: &str = "config.toml";

/// Which calendar decides when a new day starts for streaks and tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// Device-local midnight.
    Local,
    /// UTC midnight.
    Utc,
}

impl DayBoundary {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(DayBoundary::Local),
            "utc" => Some(DayBoundary::Utc),
            _ => None,
        }
    }
}

/// Caller-side timeouts for every suspension point.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeouts {
    pub fonts: Duration,
    pub rasterize: Duration,
    pub clipboard: Duration,
    pub share: Duration,
    /// Download and browser navigation.
    pub delivery: Duration,
    pub storage: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            fonts: Duration::from_secs(5),
            rasterize: Duration::from_secs(20),
            clipboard: Duration::from_secs(3),
            // Share sheets stay open while the user picks a target.
            share: Duration::from_secs(120),
            delivery: Duration::from_secs(10),
            storage: Duration::from_secs(5),
        }
    }
}

/// Ihsan configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct IhsanConfig {
    /// Where the key-value store file lives.
    pub data_dir: PathBuf,
    /// Where downloaded images are written.
    pub download_dir: PathBuf,
    pub day_boundary: DayBoundary,
    /// Link appended to share captions.
    pub app_url: String,
    /// File name prefix for saved cards.
    pub card_file_prefix: String,
    /// File name prefix for shared cards.
    pub share_file_prefix: String,
    /// Card background as `#RRGGBB`.
    pub background_color: String,
    /// Attribute marking nodes left out of captures.
    pub exclude_marker: String,
    /// Pause between the desktop download and opening the messaging link.
    pub desktop_link_delay: Duration,
    /// Maximum history entries returned on read.
    pub history_limit: usize,
    pub timeouts: Timeouts,
}

impl Default for IhsanConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .map(|home| home.join(DATA_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME));
        let download_dir = dirs::download_dir().unwrap_or_else(|| data_dir.join("downloads"));
        Self {
            data_dir,
            download_dir,
            day_boundary: DayBoundary::Local,
            app_url: "https://ihsan.app".to_string(),
            card_file_prefix: "ihsan-card".to_string(),
            share_file_prefix: "ihsan-share".to_string(),
            background_color: "#0F2027".to_string(),
            exclude_marker: "data-html2canvas-ignore".to_string(),
            desktop_link_delay: Duration::from_millis(1000),
            history_limit: 50,
            timeouts: Timeouts::default(),
        }
    }
}

/// On-disk shape of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    download_dir: Option<PathBuf>,
    day_boundary: Option<DayBoundary>,
    app_url: Option<String>,
    background_color: Option<String>,
    desktop_link_delay_ms: Option<u64>,
    history_limit: Option<usize>,
    timeouts: FileTimeouts,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileTimeouts {
    fonts_ms: Option<u64>,
    rasterize_ms: Option<u64>,
    clipboard_ms: Option<u64>,
    share_ms: Option<u64>,
    delivery_ms: Option<u64>,
    storage_ms: Option<u64>,
}

impl IhsanConfig {
    /// Create a new IhsanConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve defaults, the config file and environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// [`IhsanConfig::load`] with environment variables read through `lookup`.
    ///
    /// `IHSAN_DATA_DIR` also decides where `config.toml` is looked up.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup("IHSAN_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        let path = config.config_path();
        if path.exists() {
            config = config.merge_file(&path)?;
        }
        let config = config.apply_env(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the config file inside the data directory.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Path of the key-value store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("store.json")
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the download directory.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Set the day boundary.
    pub fn with_day_boundary(mut self, boundary: DayBoundary) -> Self {
        self.day_boundary = boundary;
        self
    }

    /// Set the link appended to share captions.
    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = url.into();
        self
    }

    /// Set the desktop messaging-link delay.
    pub fn with_desktop_link_delay(mut self, delay: Duration) -> Self {
        self.desktop_link_delay = delay;
        self
    }

    /// Set every timeout at once.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Card background as RGB.
    pub fn background_rgb(&self) -> Result<[u8; 3], ConfigError> {
        parse_hex_color(&self.background_color).ok_or_else(|| ConfigError::InvalidValue {
            field: "background_color".to_string(),
            value: self.background_color.clone(),
        })
    }

    /// Check values that cannot be represented by the types alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.background_rgb()?;
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_limit".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Overlay values from a TOML file.
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.merge_toml(&raw).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn merge_toml(mut self, raw: &str) -> Result<Self, String> {
        let file: FileConfig = toml::from_str(raw).map_err(|e| e.to_string())?;

        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = file.download_dir {
            self.download_dir = dir;
        }
        if let Some(boundary) = file.day_boundary {
            self.day_boundary = boundary;
        }
        if let Some(url) = file.app_url {
            self.app_url = url;
        }
        if let Some(color) = file.background_color {
            self.background_color = color;
        }
        if let Some(ms) = file.desktop_link_delay_ms {
            self.desktop_link_delay = Duration::from_millis(ms);
        }
        if let Some(limit) = file.history_limit {
            self.history_limit = limit;
        }

        let t = file.timeouts;
        let set = |slot: &mut Duration, ms: Option<u64>| {
            if let Some(ms) = ms {
                *slot = Duration::from_millis(ms);
            }
        };
        set(&mut self.timeouts.fonts, t.fonts_ms);
        set(&mut self.timeouts.rasterize, t.rasterize_ms);
        set(&mut self.timeouts.clipboard, t.clipboard_ms);
        set(&mut self.timeouts.share, t.share_ms);
        set(&mut self.timeouts.delivery, t.delivery_ms);
        set(&mut self.timeouts.storage, t.storage_ms);

        Ok(self)
    }

    /// Overlay `IHSAN_*` environment variables read through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("IHSAN_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("IHSAN_DOWNLOAD_DIR") {
            self.download_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup("IHSAN_DAY_BOUNDARY") {
            self.day_boundary =
                DayBoundary::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                    field: "IHSAN_DAY_BOUNDARY".to_string(),
                    value,
                })?;
        }
        if let Some(url) = lookup("IHSAN_APP_URL") {
            self.app_url = url;
        }
        Ok(self)
    }
}

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
