//! Trait abstractions for dependency injection and testability.
//!
//! Every platform-dependent capability is injected through one of these
//! traits, so the capture pipeline and the engagement store never sniff the
//! platform or touch ambient storage.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - Durable string key-value storage
//! - [`Clock`] - Calendar day and wall-clock time
//! - [`Rasterizer`] - Card to pixels, one per strategy
//! - [`ShareSheet`] - Native share dialog
//! - [`Clipboard`] - Text clipboard
//! - [`Downloader`] / [`Browser`] - Delivery channels
//! - [`NoticeSink`] - Toasts and alerts
//! - [`ContentSource`] - Remote reminder fetches

pub mod clipboard;
pub mod clock;
pub mod content;
pub mod delivery;
pub mod notice;
pub mod raster;
pub mod share;
pub mod store;

pub use clipboard::{Clipboard, ClipboardError};
pub use clock::{date_key, month_prefix, parse_date_key, Clock};
pub use content::ContentSource;
pub use delivery::{image_viewer_html, Browser, DeliveryError, Downloader};
pub use notice::{Notice, NoticeKind, NoticeSink};
pub use raster::{RasterError, RasterImage, RasterOptions, RasterStrategy, Rasterizer};
pub use share::{ShareData, ShareError, ShareFile, ShareSheet};
pub use store::{KeyValueStore, StoreError};
