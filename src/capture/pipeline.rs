//! Capture-and-share state machine.
//!
//! One [`CapturePipeline`] belongs to one card. A trigger while a previous
//! invocation is still generating or delivering is a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::cancel::{guard_step, CancelToken};
use super::caption::share_caption;
use super::card::CardNode;
use super::deliver::{CaptureIntent, Deliverer, Delivery};
use super::platform::PlatformClass;
use super::render::{render_card, ImageArtifact, ImageFormat};
use super::services::{CaptureServices, CaptureSettings};
use crate::error::{CaptureError, ErrorContext, IhsanError};
use crate::models::ContentItem;

/// Where the current (or last) invocation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Generating,
    Delivering,
    Done,
    Failed,
    Cancelled,
}

impl CaptureState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, CaptureState::Generating | CaptureState::Delivering)
    }
}

/// Result of one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Done(Delivery),
    /// Another invocation was in flight; nothing happened.
    Busy,
    /// Token cancelled or share dialog dismissed. Nothing was shown.
    Cancelled,
    /// Terminal failure; a notice was already shown.
    Failed,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug)]
struct Shared {
    busy: AtomicBool,
    state: Mutex<CaptureState>,
    token: Mutex<Option<CancelToken>>,
}

/// Holds the busy flag for one invocation and releases it on drop.
struct BusyGuard {
    shared: Arc<Shared>,
}

impl BusyGuard {
    fn acquire(shared: &Arc<Shared>, token: CancelToken) -> Option<Self> {
        shared
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        *lock(&shared.token) = Some(token);
        Some(Self {
            shared: Arc::clone(shared),
        })
    }

    fn set_state(&self, state: CaptureState) {
        *lock(&self.shared.state) = state;
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.shared.state);
        // Dropped mid-flight means the invocation future itself was dropped.
        if state.is_in_flight() {
            *state = CaptureState::Cancelled;
        }
        drop(state);
        *lock(&self.shared.token) = None;
        self.shared.busy.store(false, Ordering::Release);
    }
}

/// Renders a card and delivers it for a save or share intent.
#[derive(Debug, Clone)]
pub struct CapturePipeline {
    services: CaptureServices,
    settings: CaptureSettings,
    shared: Arc<Shared>,
}

impl CapturePipeline {
    pub fn new(services: CaptureServices, settings: CaptureSettings) -> Self {
        Self {
            services,
            settings,
            shared: Arc::new(Shared {
                busy: AtomicBool::new(false),
                state: Mutex::new(CaptureState::Idle),
                token: Mutex::new(None),
            }),
        }
    }

    pub fn state(&self) -> CaptureState {
        *lock(&self.shared.state)
    }

    pub fn is_busy(&self) -> bool {
        self.shared.busy.load(Ordering::Acquire)
    }

    pub fn class(&self) -> PlatformClass {
        self.services.class()
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Cancel the in-flight invocation, if any.
    pub fn cancel(&self) {
        if let Some(token) = lock(&self.shared.token).as_ref() {
            token.cancel();
        }
    }

    /// Render `card` outside any invocation.
    ///
    /// Shows "Generation failed: ..." and returns `None` on failure.
    pub async fn render_to_image(&self, card: &CardNode, format: ImageFormat) -> Option<ImageArtifact> {
        let token = CancelToken::new();
        match render_card(self.services.rasterizer().as_ref(), card, format, &self.settings, &token).await {
            Ok(artifact) => Some(artifact),
            Err(err) => {
                self.report_render_failure(err, ErrorContext::new("render_to_image"));
                None
            }
        }
    }

    /// Save the reminder card for `item`.
    pub async fn save(&self, item: &ContentItem) -> CaptureOutcome {
        let card = CardNode::reminder_card_marked(item, &self.settings.exclude_marker);
        self.run(&card, CaptureIntent::Save, "").await
    }

    /// Share the reminder card for `item` with its caption.
    pub async fn share(&self, item: &ContentItem) -> CaptureOutcome {
        let card = CardNode::reminder_card_marked(item, &self.settings.exclude_marker);
        let caption = share_caption(item, &self.settings.app_url);
        self.run(&card, CaptureIntent::Share, &caption).await
    }

    /// One capture-and-share invocation.
    pub async fn run(&self, card: &CardNode, intent: CaptureIntent, caption: &str) -> CaptureOutcome {
        let token = CancelToken::new();
        let Some(guard) = BusyGuard::acquire(&self.shared, token.clone()) else {
            info!(intent = intent.as_str(), "Capture already in flight, ignoring trigger");
            return CaptureOutcome::Busy;
        };

        let invocation = Uuid::new_v4().to_string();
        let span = info_span!(
            "capture",
            invocation = %invocation,
            intent = intent.as_str(),
            class = self.class().as_str(),
        );
        async move {
            let outcome = self.invoke(&guard, &token, &invocation, card, intent, caption).await;
            let final_state = match &outcome {
                CaptureOutcome::Done(_) => CaptureState::Done,
                CaptureOutcome::Cancelled => CaptureState::Cancelled,
                CaptureOutcome::Failed | CaptureOutcome::Busy => CaptureState::Failed,
            };
            guard.set_state(final_state);
            info!(?outcome, "Capture finished");
            outcome
        }
        .instrument(span)
        .await
    }

    async fn invoke(
        &self,
        guard: &BusyGuard,
        token: &CancelToken,
        invocation: &str,
        card: &CardNode,
        intent: CaptureIntent,
        caption: &str,
    ) -> CaptureOutcome {
        guard.set_state(CaptureState::Generating);

        if intent == CaptureIntent::Save {
            self.services.notices.toast("Generating...");
        }
        if intent == CaptureIntent::Share {
            self.services.notices.toast("Preparing...");
            let copied = guard_step(
                token,
                "clipboard",
                self.settings.timeouts.clipboard,
                self.services.clipboard.write_text(caption),
            )
            .await;
            match copied {
                Ok(()) => {}
                Err(e) if e.is_cancellation() => return CaptureOutcome::Cancelled,
                Err(e) => warn!(error = %e, "Caption not copied to clipboard"),
            }
        }

        let format = match (intent, self.class()) {
            (CaptureIntent::Save, PlatformClass::ImageOnlyShare) => ImageFormat::DataUri,
            _ => ImageFormat::Blob,
        };
        let artifact = match render_card(
            self.services.rasterizer().as_ref(),
            card,
            format,
            &self.settings,
            token,
        )
        .await
        {
            Ok(artifact) => artifact,
            Err(e) if e.is_cancellation() => return CaptureOutcome::Cancelled,
            Err(e) => {
                let context = ErrorContext::new(intent.as_str()).with_invocation_id(invocation);
                self.report_render_failure(e, context);
                return CaptureOutcome::Failed;
            }
        };

        guard.set_state(CaptureState::Delivering);
        let deliverer = Deliverer::new(&self.services, &self.settings, token);
        match deliverer.deliver(&artifact, intent, caption).await {
            Ok(delivery) => CaptureOutcome::Done(delivery),
            Err(e) if e.is_cancellation() => {
                info!(error = %e, "Delivery cancelled by user");
                CaptureOutcome::Cancelled
            }
            Err(_) => CaptureOutcome::Failed,
        }
    }

    fn report_render_failure(&self, err: CaptureError, context: ErrorContext) {
        if err.is_cancellation() {
            return;
        }
        let context = context.with_component("capture");
        let logged = context.to_log_string();
        let err = IhsanError::from(err).with_context(context);
        warn!(error = %err, code = err.error_code(), context = %logged, "Card generation failed");
        self.services.notices.alert(&err.user_message());
    }
}
