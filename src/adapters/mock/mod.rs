//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling unit testing without storage, a display or a browser.
//!
//! # Available Mocks
//!
//! - [`InMemoryStore`] - In-memory key-value store with failure toggles
//! - [`FixedClock`] - Clock pinned to a settable date
//! - [`MockRasterizer`] - Solid-color rasterizer with scripted failures
//! - [`MockShareSheet`] - Share sheet with scripted outcomes per call
//! - [`MockClipboard`] - Records copied text
//! - [`MockDownloader`] / [`MockBrowser`] - Record delivery attempts
//! - [`RecordingNotices`] - Records toasts and alerts
//! - [`MockContentSource`] - Canned remote content
//!
//! Mocks that take part in the capture pipeline can share an [`EventLog`]
//! so tests can assert the order of steps across collaborators.

pub mod clipboard;
pub mod clock;
pub mod content;
pub mod delivery;
pub mod notices;
pub mod raster;
pub mod share;
pub mod store;

pub use clipboard::MockClipboard;
pub use clock::FixedClock;
pub use content::MockContentSource;
pub use delivery::{BrowserCall, MockBrowser, MockDownloader};
pub use notices::RecordingNotices;
pub use raster::MockRasterizer;
pub use share::MockShareSheet;
pub use store::InMemoryStore;

use std::sync::{Arc, Mutex, MutexGuard};

/// Lock a mock's state, recovering it if a panicking test poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Ordered record of calls made across several mocks.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: impl Into<String>) {
        lock(&self.events).push(event.into());
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> Vec<String> {
        lock(&self.events).clone()
    }
}
