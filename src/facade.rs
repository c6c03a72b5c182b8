//! The `Ihsan` facade: what the host UI calls on user events.

use std::sync::Arc;
use tracing::debug;

use crate::capture::{CaptureOutcome, CapturePipeline};
use crate::engagement::{EngagementStore, SchemaStatus};
use crate::models::{ContentItem, VisitOutcome};
use crate::traits::NoticeSink;

/// Engagement store, notices and (optionally) the capture pipeline, wired
/// together with the user-facing messages.
#[derive(Clone)]
pub struct Ihsan {
    engagement: EngagementStore,
    notices: Arc<dyn NoticeSink>,
    capture: Option<Arc<CapturePipeline>>,
}

impl std::fmt::Debug for Ihsan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ihsan")
            .field("engagement", &self.engagement)
            .field("capture", &self.capture.is_some())
            .finish_non_exhaustive()
    }
}

impl Ihsan {
    pub fn new(engagement: EngagementStore, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            engagement,
            notices,
            capture: None,
        }
    }

    pub fn with_capture(mut self, pipeline: CapturePipeline) -> Self {
        self.capture = Some(Arc::new(pipeline));
        self
    }

    pub fn engagement(&self) -> &EngagementStore {
        &self.engagement
    }

    pub fn capture(&self) -> Option<&CapturePipeline> {
        self.capture.as_deref()
    }

    /// Migrate storage, then log today's visit.
    pub async fn on_startup(&self) -> VisitOutcome {
        let schema = self.engagement.open().await;
        if schema != SchemaStatus::Current {
            debug!(?schema, "Engagement schema checked");
        }
        let outcome = self.engagement.record_visit().await;
        if outcome.increased() {
            self.notices
                .toast(&format!("🔥 Streak Increased! {} Days", outcome.streak));
        }
        outcome
    }

    /// Track a content view. Returns whether the item is a favorite.
    ///
    /// Counter items (adhkar, tasbeeh) are shown by their own views and
    /// never enter history.
    pub async fn view(&self, item: &ContentItem) -> bool {
        if item.content_type.is_counter() {
            return false;
        }
        self.engagement.record_history(item).await;
        self.engagement.is_favorite(&item.id).await
    }

    pub async fn toggle_favorite(&self, item: &ContentItem) -> bool {
        let now = self.engagement.toggle_favorite(item).await;
        self.notices.toast(if now {
            "Added to Favorites ❤️"
        } else {
            "Removed from Favorites"
        });
        now
    }

    /// Save `item` as an image. `None` when no capture pipeline is wired.
    pub async fn save(&self, item: &ContentItem) -> Option<CaptureOutcome> {
        match &self.capture {
            Some(pipeline) => Some(pipeline.save(item).await),
            None => None,
        }
    }

    /// Share `item` as an image. `None` when no capture pipeline is wired.
    pub async fn share(&self, item: &ContentItem) -> Option<CaptureOutcome> {
        match &self.capture {
            Some(pipeline) => Some(pipeline.share(item).await),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FixedClock, InMemoryStore, RecordingNotices};
    use crate::content::TASBEEH_PHRASES;
    use crate::models::ContentType;

    fn setup() -> (Ihsan, RecordingNotices, FixedClock) {
        let clock = FixedClock::ymd(2024, 6, 1);
        let notices = RecordingNotices::new();
        let store = EngagementStore::new(Arc::new(InMemoryStore::new()), Arc::new(clock.clone()));
        (Ihsan::new(store, Arc::new(notices.clone())), notices, clock)
    }

    #[tokio::test]
    async fn test_startup_toasts_only_on_increase() {
        let (app, notices, clock) = setup();
        assert_eq!(app.on_startup().await.streak, 1);
        assert!(notices.toasts().is_empty());

        clock.advance_days(1);
        app.on_startup().await;
        assert_eq!(notices.toasts(), vec!["🔥 Streak Increased! 2 Days".to_string()]);

        app.on_startup().await;
        assert_eq!(notices.toasts().len(), 1);
    }

    #[tokio::test]
    async fn test_view_skips_counter_items() {
        let (app, _notices, _clock) = setup();
        app.view(&TASBEEH_PHRASES[0].to_item()).await;
        assert!(app.engagement().history().await.is_empty());

        let dua = ContentItem::new("d1", ContentType::Dua, "a", "b", "c", "r");
        assert!(!app.view(&dua).await);
        app.toggle_favorite(&dua).await;
        assert!(app.view(&dua).await);
        assert_eq!(app.engagement().history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_favorite_toasts() {
        let (app, notices, _clock) = setup();
        let dua = ContentItem::new("d1", ContentType::Dua, "a", "b", "c", "r");
        assert!(app.toggle_favorite(&dua).await);
        assert!(!app.toggle_favorite(&dua).await);
        assert_eq!(
            notices.toasts(),
            vec![
                "Added to Favorites ❤️".to_string(),
                "Removed from Favorites".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_capture_without_pipeline() {
        let (app, _notices, _clock) = setup();
        let dua = ContentItem::new("d1", ContentType::Dua, "a", "b", "c", "r");
        assert!(app.save(&dua).await.is_none());
        assert!(app.capture().is_none());
    }
}
