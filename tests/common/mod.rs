//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures wiring the library against the
//! mock adapters.
//!
//! # Example
//!
//! ```ignore
//! use common::CaptureRig;
//!
//! let rig = CaptureRig::new(PlatformCapabilities::desktop());
//! let outcome = rig.pipeline.share(&sample_item()).await;
//! assert_eq!(rig.log.events(), vec!["clipboard", "rasterize:canvas", "download"]);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use ihsan::capture::{CapturePipeline, CaptureServices, CaptureSettings, PlatformCapabilities};
use ihsan::engagement::EngagementStore;
use ihsan::models::{ContentItem, ContentType};
use ihsan::traits::RasterStrategy;

/// A reminder item with a caption-worthy translation.
pub fn sample_item() -> ContentItem {
    ContentItem::new(
        "d1",
        ContentType::Dua,
        "رَبِّ اشْرَحْ لِي صَدْرِي",
        "My Lord, expand for me my breast",
        "اے میرے رب! میرا سینہ کھول دے",
        "Surah Taha 20:25-26",
    )
    .with_tags(["Anxious"])
}

/// Numbered items for history tests.
pub fn numbered_items(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|n| {
            ContentItem::new(
                format!("item-{n:03}"),
                ContentType::Dua,
                "ar",
                format!("translation {n}"),
                "",
                format!("Ref {n}"),
            )
        })
        .collect()
}

/// Engagement store over an in-memory store and a fixed clock.
pub fn engagement_at(year: i32, month: u32, day: u32) -> (EngagementStore, InMemoryStore, FixedClock) {
    let kv = InMemoryStore::new();
    let clock = FixedClock::ymd(year, month, day);
    let store = EngagementStore::new(Arc::new(kv.clone()), Arc::new(clock.clone()));
    (store, kv, clock)
}

/// Capture pipeline with every collaborator mocked and logging into one
/// shared [`EventLog`].
pub struct CaptureRig {
    pub pipeline: CapturePipeline,
    pub log: EventLog,
    pub foreign_object: MockRasterizer,
    pub canvas: MockRasterizer,
    pub share_sheet: MockShareSheet,
    pub clipboard: MockClipboard,
    pub downloader: MockDownloader,
    pub browser: MockBrowser,
    pub notices: RecordingNotices,
    pub clock: FixedClock,
}

impl CaptureRig {
    pub fn new(capabilities: PlatformCapabilities) -> Self {
        Self::with_settings(capabilities, CaptureSettings::default())
    }

    pub fn with_settings(capabilities: PlatformCapabilities, settings: CaptureSettings) -> Self {
        let log = EventLog::new();
        let foreign_object =
            MockRasterizer::new(RasterStrategy::ForeignObject).with_event_log(log.clone());
        let canvas = MockRasterizer::new(RasterStrategy::Canvas).with_event_log(log.clone());
        let share_sheet = MockShareSheet::new().with_event_log(log.clone());
        let clipboard = MockClipboard::new().with_event_log(log.clone());
        let downloader = MockDownloader::new().with_event_log(log.clone());
        let browser = MockBrowser::new().with_event_log(log.clone());
        let notices = RecordingNotices::new();
        let clock = FixedClock::ymd(2024, 6, 1);

        let services = CaptureServices {
            capabilities,
            foreign_object: Arc::new(foreign_object.clone()),
            canvas: Arc::new(canvas.clone()),
            share_sheet: Arc::new(share_sheet.clone()),
            clipboard: Arc::new(clipboard.clone()),
            downloader: Arc::new(downloader.clone()),
            browser: Arc::new(browser.clone()),
            notices: Arc::new(notices.clone()),
            clock: Arc::new(clock.clone()),
        };

        Self {
            pipeline: CapturePipeline::new(services, settings),
            log,
            foreign_object,
            canvas,
            share_sheet,
            clipboard,
            downloader,
            browser,
            notices,
            clock,
        }
    }

    /// Rasterizer the platform will pick.
    pub fn active_rasterizer(&self) -> &MockRasterizer {
        match self.pipeline.class() {
            ihsan::capture::PlatformClass::ImageOnlyShare => &self.foreign_object,
            _ => &self.canvas,
        }
    }
}
