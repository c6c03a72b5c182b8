//! Notice sink recording everything it is told.

use std::sync::{Arc, Mutex};

use super::lock;
use crate::traits::{Notice, NoticeKind, NoticeSink};

#[derive(Debug, Clone, Default)]
pub struct RecordingNotices {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Toast)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Alert)
    }

    pub fn clear(&self) {
        lock(&self.notices).clear();
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        lock(&self.notices)
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, notice: Notice) {
        lock(&self.notices).push(notice);
    }
}
