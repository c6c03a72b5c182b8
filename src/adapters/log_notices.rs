//! Notice sink for the command line.

use tracing::{info, warn};

use crate::traits::{Notice, NoticeKind, NoticeSink};

/// [`NoticeSink`] printing toasts to stdout and alerts to stderr.
///
/// Both are also traced so they show up alongside pipeline logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotices;

impl LogNotices {
    pub fn new() -> Self {
        Self
    }
}

impl NoticeSink for LogNotices {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Toast => {
                info!(message = %notice.message, "Toast");
                println!("{}", notice.message);
            }
            NoticeKind::Alert => {
                warn!(message = %notice.message, "Alert");
                eprintln!("! {}", notice.message);
            }
        }
    }
}
