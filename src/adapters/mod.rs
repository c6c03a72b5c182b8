//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the traits in `crate::traits` for a
//! desktop host. The binary wires these; library users on other hosts
//! bring their own.
//!
//! # Adapters
//!
//! - [`FileStore`] - JSON-file key-value store
//! - [`SystemClock`] - Wall clock in the configured day boundary
//! - [`SnapshotRasterizer`] - Decodes a card snapshot rendered by the host
//! - [`ArboardClipboard`] - OS clipboard via arboard
//! - [`DirectoryDownloader`] - Writes downloads into a directory
//! - [`SystemBrowser`] - Opens pages and links in the default browser
//! - [`NoShareSheet`] - Share sheet for hosts without one
//! - [`LogNotices`] - Prints toasts and alerts
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every trait.

pub mod arboard_clipboard;
pub mod directory_downloader;
pub mod file_store;
pub mod log_notices;
pub mod mock;
pub mod no_share_sheet;
pub mod snapshot_raster;
pub mod system_browser;
pub mod system_clock;

pub use arboard_clipboard::ArboardClipboard;
pub use directory_downloader::DirectoryDownloader;
pub use file_store::FileStore;
pub use log_notices::LogNotices;
pub use mock::{
    FixedClock, InMemoryStore, MockBrowser, MockClipboard, MockContentSource, MockDownloader,
    MockRasterizer, MockShareSheet, RecordingNotices,
};
pub use no_share_sheet::NoShareSheet;
pub use snapshot_raster::SnapshotRasterizer;
pub use system_browser::SystemBrowser;
pub use system_clock::SystemClock;
