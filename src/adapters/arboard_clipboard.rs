//! System clipboard adapter using arboard.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::warn;

use crate::traits::{Clipboard, ClipboardError};

/// How long the caption stays owned on Linux when nothing replaces it.
pub const DEFAULT_HOLD: Duration = Duration::from_secs(30);

/// [`Clipboard`] writing to the OS clipboard.
///
/// On Linux (X11 and Wayland) the clipboard is served by the process that
/// owns it, so the text vanishes once the handle is dropped unless a
/// clipboard manager copies it. There the adapter keeps ownership on a
/// dedicated thread until another application takes the clipboard or
/// [`hold`](ArboardClipboard::with_hold) elapses. A short-lived process must
/// call [`settle`](ArboardClipboard::settle) before exiting, which blocks
/// for up to the hold time.
///
/// Elsewhere the OS keeps the text and a fresh handle is opened per write
/// on a blocking thread.
#[derive(Debug, Clone)]
pub struct ArboardClipboard {
    hold: Duration,
    holder: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self {
            hold: DEFAULT_HOLD,
            holder: Arc::new(Mutex::new(None)),
        }
    }

    /// Set how long Linux ownership is kept after a write.
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// True while a Linux holder thread still owns the clipboard.
    pub fn is_holding(&self) -> bool {
        self.lock_holder()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait until the last write is no longer owned by this process.
    pub async fn settle(&self) {
        let handle = self.lock_holder().take();
        if let Some(handle) = handle {
            if tokio::task::spawn_blocking(move || handle.join())
                .await
                .is_err()
            {
                warn!("Clipboard holder thread did not finish cleanly");
            }
        }
    }

    fn lock_holder(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.holder
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(target_os = "linux")]
    async fn write_owned(&self, text: String) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;
        use std::time::Instant;

        let hold = self.hold;
        let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();
        let handle = std::thread::Builder::new()
            .name("ihsan-clipboard".to_string())
            .spawn(move || {
                let mut clipboard = match arboard::Clipboard::new() {
                    Ok(clipboard) => clipboard,
                    Err(e) => {
                        let _ = ready_tx.send(Err(ClipboardError::Unavailable(e.to_string())));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));
                // Returns once another owner takes over or the deadline passes.
                if let Err(e) = clipboard.set().wait_until(Instant::now() + hold).text(text) {
                    warn!(error = %e, "Clipboard write failed");
                }
            })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        // A previous holder loses ownership to this write and exits on its own.
        *self.lock_holder() = Some(handle);

        ready_rx
            .await
            .map_err(|_| ClipboardError::WriteFailed("clipboard thread exited".to_string()))?
    }

    #[cfg(not(target_os = "linux"))]
    async fn write_owned(&self, text: String) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.write_owned(text.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hold() {
        let clipboard = ArboardClipboard::new();
        assert_eq!(clipboard.hold(), DEFAULT_HOLD);
        assert_eq!(
            clipboard.with_hold(Duration::from_secs(5)).hold(),
            Duration::from_secs(5)
        );
    }

    #[tokio::test]
    async fn test_settle_without_write_returns_at_once() {
        let clipboard = ArboardClipboard::new();
        assert!(!clipboard.is_holding());
        clipboard.settle().await;
        assert!(!clipboard.is_holding());
    }

    #[tokio::test]
    async fn test_settle_joins_holder_thread() {
        let clipboard = ArboardClipboard::new();
        let handle = std::thread::spawn(|| std::thread::sleep(Duration::from_millis(20)));
        *clipboard.lock_holder() = Some(handle);

        clipboard.settle().await;

        assert!(!clipboard.is_holding());
        assert!(clipboard.lock_holder().is_none());
    }
}
