//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from `ihsan::adapters::mock`
//! and adds scripted share outcomes used across capture tests.

pub use ihsan::adapters::mock::{
    BrowserCall, EventLog, FixedClock, InMemoryStore, MockBrowser, MockClipboard,
    MockContentSource, MockDownloader, MockRasterizer, MockShareSheet, RecordingNotices,
};
pub use ihsan::traits::ShareError;

/// Script `outcomes` onto `sheet`, in call order.
pub fn script_share(sheet: &MockShareSheet, outcomes: Vec<Result<(), ShareError>>) {
    for outcome in outcomes {
        sheet.push_outcome(outcome);
    }
}

/// A non-cancel share rejection.
pub fn share_rejected() -> Result<(), ShareError> {
    Err(ShareError::Failed("NotAllowedError".to_string()))
}

/// The user dismissed the share dialog.
pub fn share_dismissed() -> Result<(), ShareError> {
    Err(ShareError::Cancelled)
}
