//! Favorites and viewing history, one record per content id.

use futures::future::join_all;
use tracing::{debug, warn};

use super::keys::{favorite_key, history_key, FAVORITES_PREFIX, HISTORY_PREFIX};
use super::{degrade, EngagementStore};
use crate::models::{ContentItem, HistoryRecord};
use crate::traits::StoreError;

impl EngagementStore {
    /// Remove `item` from favorites if present, else add it.
    ///
    /// Returns whether the item is a favorite afterwards. On storage failure
    /// the membership is reported unchanged.
    pub async fn toggle_favorite(&self, item: &ContentItem) -> bool {
        let key = favorite_key(&item.id);
        let result = async {
            if self.get(&key).await?.is_some() {
                self.remove(&key).await?;
                Ok::<_, StoreError>(false)
            } else {
                self.write_json(&key, item).await?;
                Ok(true)
            }
        }
        .await;

        match result {
            Ok(now) => {
                debug!(id = %item.id, favorite = now, "Favorite toggled");
                now
            }
            Err(e) => {
                let was = self.is_favorite(&item.id).await;
                degrade("toggle_favorite", &key, e, was)
            }
        }
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        let key = favorite_key(id);
        match self.get(&key).await {
            Ok(value) => value.is_some(),
            Err(e) => degrade("is_favorite", &key, e, false),
        }
    }

    /// Every favorite, ordered by id.
    pub async fn favorites(&self) -> Vec<ContentItem> {
        let result = async {
            let keys = self.keys(FAVORITES_PREFIX).await?;
            let reads = keys.iter().map(|key| self.read_json::<ContentItem>(key));
            let mut items = Vec::with_capacity(keys.len());
            for (key, read) in keys.iter().zip(join_all(reads).await) {
                match read {
                    Ok(Some(item)) => items.push(item),
                    Ok(None) => {}
                    Err(StoreError::Serialization(message)) => {
                        warn!(key = %key, %message, "Skipping unreadable favorite");
                    }
                    Err(e) => return Err(e),
                }
            }
            items.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(items)
        }
        .await;

        result.unwrap_or_else(|e| degrade("favorites", FAVORITES_PREFIX, e, Vec::new()))
    }

    /// Record that `item` was just viewed, replacing any earlier view.
    pub async fn record_history(&self, item: &ContentItem) {
        let key = history_key(&item.id);
        let record = HistoryRecord {
            item: item.clone(),
            viewed_at: self.clock.now_millis(),
        };
        if let Err(e) = self.write_json(&key, &record).await {
            degrade("record_history", &key, e, ());
        }
    }

    /// The most recent views, newest first, capped at the history limit.
    pub async fn history(&self) -> Vec<HistoryRecord> {
        let result = async {
            let keys = self.keys(HISTORY_PREFIX).await?;
            let reads = keys.iter().map(|key| self.read_json::<HistoryRecord>(key));
            let mut records = Vec::with_capacity(keys.len());
            for (key, read) in keys.iter().zip(join_all(reads).await) {
                match read {
                    Ok(Some(record)) => records.push(record),
                    Ok(None) => {}
                    Err(StoreError::Serialization(message)) => {
                        warn!(key = %key, %message, "Skipping unreadable history record");
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(records)
        }
        .await;

        match result {
            Ok(mut records) => {
                records.sort_by(|a, b| {
                    b.viewed_at
                        .cmp(&a.viewed_at)
                        .then_with(|| a.item.id.cmp(&b.item.id))
                });
                records.truncate(self.history_limit);
                records
            }
            Err(e) => degrade("history", HISTORY_PREFIX, e, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FixedClock, InMemoryStore};
    use crate::models::ContentType;
    use std::sync::Arc;

    fn setup() -> (EngagementStore, InMemoryStore, FixedClock) {
        let kv = InMemoryStore::new();
        let clock = FixedClock::ymd(2024, 6, 1);
        let store = EngagementStore::new(Arc::new(kv.clone()), Arc::new(clock.clone()));
        (store, kv, clock)
    }

    fn dua(id: &str) -> ContentItem {
        ContentItem::new(id, ContentType::Dua, "ar", "en", "ur", "ref")
    }

    #[tokio::test]
    async fn test_toggle_twice() {
        let (store, kv, _clock) = setup();
        let item = dua("dua-1");

        assert!(store.toggle_favorite(&item).await);
        assert!(store.is_favorite("dua-1").await);
        assert!(!store.toggle_favorite(&item).await);
        assert!(!store.is_favorite("dua-1").await);
        assert_eq!(kv.raw("favorites/dua-1"), None);
    }

    #[tokio::test]
    async fn test_favorites_sorted_by_id() {
        let (store, _kv, _clock) = setup();
        for id in ["name-9", "dua-2", "name-10"] {
            store.toggle_favorite(&dua(id)).await;
        }
        let ids: Vec<_> = store.favorites().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["dua-2", "name-10", "name-9"]);
    }

    #[tokio::test]
    async fn test_favorites_skip_corrupt_record() {
        let (store, kv, _clock) = setup();
        store.toggle_favorite(&dua("dua-1")).await;
        kv.insert("favorites/broken", "not json");
        assert_eq!(store.favorites().await.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_with_failing_writes_reports_unchanged() {
        let (store, kv, _clock) = setup();
        kv.set_write_error(Some(StoreError::QuotaExceeded));
        assert!(!store.toggle_favorite(&dua("dua-1")).await);
    }

    #[tokio::test]
    async fn test_history_capped_and_newest_first() {
        let (store, _kv, clock) = setup();
        for n in 0..60 {
            store.record_history(&dua(&format!("item-{n:02}"))).await;
            clock.advance_millis(1_000);
        }
        let history = store.history().await;
        assert_eq!(history.len(), 50);
        assert_eq!(history[0].item.id, "item-59");
        assert_eq!(history[49].item.id, "item-10");
        assert!(history.windows(2).all(|w| w[0].viewed_at > w[1].viewed_at));
    }

    #[tokio::test]
    async fn test_revisit_overwrites_timestamp() {
        let (store, _kv, clock) = setup();
        store.record_history(&dua("a")).await;
        clock.advance_millis(10);
        store.record_history(&dua("b")).await;
        clock.advance_millis(10);
        store.record_history(&dua("a")).await;

        let ids: Vec<_> = store.history().await.into_iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_history_ties_broken_by_id() {
        let (store, _kv, _clock) = setup();
        store.record_history(&dua("b")).await;
        store.record_history(&dua("a")).await;
        let ids: Vec<_> = store.history().await.into_iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_history_limit_is_configurable() {
        let (store, _kv, clock) = setup();
        let store = store.with_history_limit(3);
        for n in 0..5 {
            store.record_history(&dua(&n.to_string())).await;
            clock.advance_millis(1);
        }
        assert_eq!(store.history().await.len(), 3);
    }

    #[tokio::test]
    async fn test_unreadable_storage_reads_empty() {
        let (store, kv, _clock) = setup();
        store.record_history(&dua("a")).await;
        kv.set_read_error(Some(StoreError::Io("disk".to_string())));
        assert!(store.history().await.is_empty());
        assert!(store.favorites().await.is_empty());
    }
}
