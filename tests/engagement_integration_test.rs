// Integration tests for engagement tracking through the public facade and
// the file-backed store.

mod common;

use std::sync::Arc;

use common::*;
use ihsan::adapters::FileStore;
use ihsan::engagement::{EngagementStore, SchemaStatus, CURRENT_SCHEMA_VERSION};
use ihsan::models::StreakChange;
use ihsan::Ihsan;
use tempfile::TempDir;

fn app_at(year: i32, month: u32, day: u32) -> (Ihsan, InMemoryStore, FixedClock, RecordingNotices) {
    let (engagement, kv, clock) = engagement_at(year, month, day);
    let notices = RecordingNotices::new();
    let app = Ihsan::new(engagement, Arc::new(notices.clone()));
    (app, kv, clock, notices)
}

#[tokio::test]
async fn test_visit_streak_across_days() {
    let (app, kv, clock, notices) = app_at(2024, 6, 1);

    let first = app.on_startup().await;
    assert_eq!(first.streak, 1);
    assert_eq!(kv.raw("streak_count").as_deref(), Some("1"));

    clock.advance_days(1);
    let next = app.on_startup().await;
    assert_eq!(next.streak, 2);
    assert_eq!(next.change, StreakChange::Increased);
    assert_eq!(notices.toasts(), vec!["🔥 Streak Increased! 2 Days"]);

    // 06-02 -> 06-05 skips two days
    clock.advance_days(3);
    let after_gap = app.on_startup().await;
    assert_eq!(after_gap.streak, 1);
    assert_eq!(after_gap.change, StreakChange::Reset);
    assert_eq!(notices.toasts().len(), 1);
}

#[tokio::test]
async fn test_history_keeps_newest_fifty() {
    let (app, _kv, clock, _notices) = app_at(2024, 6, 1);

    for item in numbered_items(60) {
        app.view(&item).await;
        clock.advance_millis(1_000);
    }

    let history = app.engagement().history().await;
    assert_eq!(history.len(), 50);
    assert_eq!(history[0].item.id, "item-059");
    assert_eq!(history[49].item.id, "item-010");
    assert!(history.windows(2).all(|w| w[0].viewed_at >= w[1].viewed_at));
}

#[tokio::test]
async fn test_favorite_round_trip_through_facade() {
    let (app, _kv, _clock, _notices) = app_at(2024, 6, 1);
    let item = sample_item();

    assert!(app.toggle_favorite(&item).await);
    let favorites = app.engagement().favorites().await;
    assert_eq!(favorites, vec![item.clone()]);

    assert!(!app.toggle_favorite(&item).await);
    assert!(app.engagement().favorites().await.is_empty());
}

#[tokio::test]
async fn test_tally_month_spans_only_current_month() {
    let (engagement, _kv, clock) = engagement_at(2024, 5, 31);

    for _ in 0..4 {
        engagement.increment_tally("subhanallah").await;
    }
    clock.advance_days(1);
    for _ in 0..3 {
        engagement.increment_tally("subhanallah").await;
    }

    let stats = engagement.tally_stats("subhanallah").await;
    assert_eq!(stats.today, 3);
    assert_eq!(stats.month, 3);
    assert_eq!(stats.streak, 2);
}

#[tokio::test]
async fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let clock = FixedClock::ymd(2024, 6, 1);

    {
        let engagement = EngagementStore::new(
            Arc::new(FileStore::new(&path)),
            Arc::new(clock.clone()),
        );
        assert!(matches!(
            engagement.open().await,
            SchemaStatus::Current | SchemaStatus::Migrated { .. }
        ));
        engagement.record_visit().await;
        engagement.toggle_favorite(&sample_item()).await;
        engagement.increment_tally("alhamdulillah").await;
    }

    clock.advance_days(1);
    let reopened = EngagementStore::new(Arc::new(FileStore::new(&path)), Arc::new(clock));
    assert_eq!(reopened.open().await, SchemaStatus::Current);
    assert_eq!(reopened.record_visit().await.streak, 2);
    assert!(reopened.is_favorite("d1").await);
    assert_eq!(reopened.tally_stats("alhamdulillah").await.streak, 1);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains(&format!("\"{}\"", CURRENT_SCHEMA_VERSION)));
}

#[tokio::test]
async fn test_legacy_store_is_migrated_on_startup() {
    let kv = InMemoryStore::with_entries([
        ("streak_count", "4"),
        ("last_visit_date", "Fri May 31 2024"),
    ]);
    let clock = FixedClock::ymd(2024, 6, 1);
    let app = Ihsan::new(
        EngagementStore::new(Arc::new(kv.clone()), Arc::new(clock)),
        Arc::new(RecordingNotices::new()),
    );

    let outcome = app.on_startup().await;

    assert_eq!(outcome.streak, 5);
    assert_eq!(kv.raw("last_visit_date").as_deref(), Some("2024-06-01"));
}

#[tokio::test]
async fn test_corrupt_store_file_recovers_on_next_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"streak_count": "3", trunc"#).unwrap();
    let clock = FixedClock::ymd(2024, 6, 1);
    let engagement = EngagementStore::new(Arc::new(FileStore::new(&path)), Arc::new(clock.clone()));

    assert_eq!(engagement.record_visit().await.streak, 1);
    assert_eq!(engagement.increment_tally("subhanallah").await.today, 1);

    clock.advance_days(1);
    let reopened = EngagementStore::new(Arc::new(FileStore::new(&path)), Arc::new(clock));
    assert_eq!(reopened.record_visit().await.streak, 2);
    assert_eq!(reopened.increment_tally("subhanallah").await.streak, 2);
    assert!(dir.path().join("store.json.corrupt").exists());
}
