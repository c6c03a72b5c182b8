//! Mock clipboard for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{lock, EventLog};
use crate::traits::{Clipboard, ClipboardError};

/// Clipboard that records what was copied.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    texts: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
    delay: Arc<Mutex<Option<Duration>>>,
    log: Option<EventLog>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `clipboard` to `log` on every call.
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *lock(&self.should_fail) = should_fail;
    }

    /// Delay every write, as a stalled permission prompt would.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *lock(&self.delay) = delay;
    }

    /// Every text written, oldest first.
    pub fn texts(&self) -> Vec<String> {
        lock(&self.texts).clone()
    }

    pub fn last_text(&self) -> Option<String> {
        lock(&self.texts).last().cloned()
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(log) = &self.log {
            log.push("clipboard");
        }
        let delay = *lock(&self.delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *lock(&self.should_fail) {
            return Err(ClipboardError::WriteFailed("Mock clipboard failure".to_string()));
        }
        lock(&self.texts).push(text.to_string());
        Ok(())
    }
}
