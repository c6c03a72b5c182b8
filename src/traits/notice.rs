//! User-facing notices: transient toasts and blocking alerts.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Short-lived status message.
    Toast,
    /// Blocking notice the user must acknowledge.
    Alert,
}

/// A notice as reported to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn toast(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Toast,
            message: message.into(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            message: message.into(),
        }
    }
}

/// Where results of user actions are reported.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);

    fn toast(&self, message: &str) {
        self.notify(Notice::toast(message));
    }

    fn alert(&self, message: &str) {
        self.notify(Notice::alert(message));
    }
}
