//! Cancellation token and step guard for capture invocations.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use crate::error::CaptureError;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Cooperative cancellation signal shared by one capture invocation.
///
/// Clones observe the same signal. Cancelling is idempotent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once [`CancelToken::cancel`] has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking the flag so a concurrent cancel is not missed.
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// Run one suspension point, racing it against cancellation and `limit`.
///
/// The step's own error is converted into a [`CaptureError`]; a timeout
/// becomes [`CaptureError::TimedOut`] naming `step`.
pub async fn guard_step<F, T, E>(
    token: &CancelToken,
    step: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, CaptureError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<CaptureError>,
{
    if token.is_cancelled() {
        return Err(CaptureError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(CaptureError::Cancelled),
        result = tokio::time::timeout(limit, fut) => match result {
            Ok(inner) => inner.map_err(Into::into),
            Err(_) => Err(CaptureError::TimedOut {
                step,
                after_ms: limit.as_millis() as u64,
            }),
        },
    }
}

/// Sleep for `delay` unless cancelled first.
pub async fn cancellable_sleep(token: &CancelToken, delay: Duration) -> Result<(), CaptureError> {
    if token.is_cancelled() {
        return Err(CaptureError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(CaptureError::Cancelled),
        _ = tokio::time::sleep(delay) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ShareError;

    #[tokio::test]
    async fn test_step_result_passes_through() {
        let token = CancelToken::new();
        let ok: Result<u32, CaptureError> =
            guard_step(&token, "share", Duration::from_secs(1), async { Ok::<_, ShareError>(7) })
                .await;
        assert_eq!(ok.unwrap(), 7);

        let err = guard_step(&token, "share", Duration::from_secs(1), async {
            Err::<(), _>(ShareError::Cancelled)
        })
        .await
        .unwrap_err();
        assert!(err.is_cancellation());
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_times_out() {
        let token = CancelToken::new();
        let err = guard_step(&token, "rasterize", Duration::from_secs(20), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<(), ShareError>(())
        })
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            CaptureError::TimedOut { step: "rasterize", after_ms: 20_000 }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_pending_step() {
        let token = CancelToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        let err = guard_step(&token, "share", Duration::from_secs(120), async {
            tokio::time::sleep(Duration::from_secs(100)).await;
            Ok::<(), ShareError>(())
        })
        .await
        .unwrap_err();
        assert!(matches!(err, CaptureError::Cancelled));
    }

    #[tokio::test]
    async fn test_already_cancelled_skips_step() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        let mut ran = false;
        let result = guard_step(&token, "clipboard", Duration::from_secs(1), async {
            ran = true;
            Ok::<(), ShareError>(())
        })
        .await;
        assert!(matches!(result, Err(CaptureError::Cancelled)));
        assert!(!ran);
        token.cancelled().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellable_sleep() {
        let token = CancelToken::new();
        cancellable_sleep(&token, Duration::from_millis(1000)).await.unwrap();
        token.cancel();
        assert!(cancellable_sleep(&token, Duration::from_millis(1000)).await.is_err());
    }
}
