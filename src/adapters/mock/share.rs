//! Mock share sheet with scripted outcomes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{lock, EventLog};
use crate::traits::{ShareData, ShareError, ShareSheet};

/// Share sheet answering each call with the next scripted outcome.
///
/// Once the script runs out every call succeeds.
///
/// # Example
///
/// ```ignore
/// let sheet = MockShareSheet::new();
/// sheet.push_outcome(Err(ShareError::Failed("NotAllowedError".into())));
/// sheet.push_outcome(Err(ShareError::Cancelled));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockShareSheet {
    outcomes: Arc<Mutex<VecDeque<Result<(), ShareError>>>>,
    calls: Arc<Mutex<Vec<ShareData>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    log: Option<EventLog>,
}

impl MockShareSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `share:files` or `share:files+text` to `log` on every call.
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn push_outcome(&self, outcome: Result<(), ShareError>) {
        lock(&self.outcomes).push_back(outcome);
    }

    /// Delay every call, as a share sheet left open would.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *lock(&self.delay) = delay;
    }

    pub fn calls(&self) -> Vec<ShareData> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl ShareSheet for MockShareSheet {
    async fn share(&self, data: &ShareData) -> Result<(), ShareError> {
        if let Some(log) = &self.log {
            let kind = if data.has_text() { "files+text" } else { "files" };
            log.push(format!("share:{kind}"));
        }
        lock(&self.calls).push(data.clone());

        let delay = *lock(&self.delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        lock(&self.outcomes).pop_front().unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outcomes_are_consumed_in_order() {
        let sheet = MockShareSheet::new();
        sheet.push_outcome(Err(ShareError::Failed("first".into())));
        sheet.push_outcome(Err(ShareError::Cancelled));

        let data = ShareData::default();
        assert_eq!(
            sheet.share(&data).await,
            Err(ShareError::Failed("first".into()))
        );
        assert_eq!(sheet.share(&data).await, Err(ShareError::Cancelled));
        assert_eq!(sheet.share(&data).await, Ok(()));
        assert_eq!(sheet.call_count(), 3);
    }
}
