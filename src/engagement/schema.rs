//! Versioned storage layout with additive migrations.
//!
//! Stores written before versioning carry no `schema_version` key and are
//! treated as version 1. Migrations only add or rewrite keys; legacy keys
//! are left in place so an older build can still read its own data.

use tracing::{debug, info, warn};

use super::keys::{
    ADHKAR_STREAK_STATE, LAST_VISIT_DATE, LEGACY_ADHKAR_DATE, LEGACY_ADHKAR_STREAK,
    SCHEMA_VERSION,
};
use super::streak::parse_stored_date;
use super::EngagementStore;
use crate::error::{ErrorContext, IhsanError};
use crate::models::StreakState;
use crate::traits::{date_key, StoreError};

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Version assumed for stores without a version key.
const UNVERSIONED: u32 = 1;

/// What [`EngagementStore::open`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    Current,
    Migrated { from: u32 },
    /// Written by a newer build; read as-is, nothing rewritten.
    Newer { found: u32 },
    /// Storage could not be reached; operations will degrade.
    Unavailable,
}

impl EngagementStore {
    /// Bring the store up to [`CURRENT_SCHEMA_VERSION`].
    pub async fn open(&self) -> SchemaStatus {
        match self.try_open().await {
            Ok(status) => status,
            Err(e) => {
                let err = IhsanError::from(e).with_context(
                    ErrorContext::new("open")
                        .with_key(SCHEMA_VERSION)
                        .with_component("engagement"),
                );
                warn!(error = %err, "Engagement schema check failed");
                SchemaStatus::Unavailable
            }
        }
    }

    async fn try_open(&self) -> Result<SchemaStatus, StoreError> {
        let found = match self.get(SCHEMA_VERSION).await? {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(v) => v,
                Err(_) => {
                    warn!(value = %raw, "Unreadable schema version; assuming unversioned");
                    UNVERSIONED
                }
            },
            None => UNVERSIONED,
        };

        if found == CURRENT_SCHEMA_VERSION {
            debug!(version = found, "Engagement schema current");
            return Ok(SchemaStatus::Current);
        }
        if found > CURRENT_SCHEMA_VERSION {
            warn!(
                found,
                supported = CURRENT_SCHEMA_VERSION,
                "Store written by a newer version; leaving layout untouched"
            );
            return Ok(SchemaStatus::Newer { found });
        }

        if found < 2 {
            self.migrate_visit_date().await?;
            self.migrate_adhkar_streak().await?;
        }
        self.set(SCHEMA_VERSION, &CURRENT_SCHEMA_VERSION.to_string())
            .await?;
        info!(from = found, to = CURRENT_SCHEMA_VERSION, "Engagement schema migrated");
        Ok(SchemaStatus::Migrated { from: found })
    }

    /// Rewrite a legacy `Sat Jun 01 2024` visit date as an ISO key.
    async fn migrate_visit_date(&self) -> Result<(), StoreError> {
        let Some(raw) = self.get(LAST_VISIT_DATE).await? else {
            return Ok(());
        };
        if let Some(day) = parse_stored_date(&raw) {
            let iso = date_key(day);
            if iso != raw {
                self.set(LAST_VISIT_DATE, &iso).await?;
                debug!(from = %raw, to = %iso, "Rewrote legacy visit date");
            }
        }
        Ok(())
    }

    /// Build the adhkar streak record from the two legacy keys.
    async fn migrate_adhkar_streak(&self) -> Result<(), StoreError> {
        if self.get(ADHKAR_STREAK_STATE).await?.is_some() {
            return Ok(());
        }
        let streak = self
            .get(LEGACY_ADHKAR_STREAK)
            .await?
            .and_then(|raw| raw.trim().parse::<u32>().ok());
        let last = self
            .get(LEGACY_ADHKAR_DATE)
            .await?
            .as_deref()
            .and_then(parse_stored_date);

        if let (Some(streak), Some(day)) = (streak, last) {
            let state = StreakState {
                streak,
                last_log_date: Some(date_key(day)),
            };
            self.write_json(ADHKAR_STREAK_STATE, &state).await?;
            debug!(streak, "Imported legacy adhkar streak");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FixedClock, InMemoryStore};
    use std::sync::Arc;

    fn open_over(kv: &InMemoryStore, clock: FixedClock) -> EngagementStore {
        EngagementStore::new(Arc::new(kv.clone()), Arc::new(clock))
    }

    #[tokio::test]
    async fn test_fresh_store_is_stamped() {
        let kv = InMemoryStore::new();
        let store = open_over(&kv, FixedClock::ymd(2024, 6, 1));
        assert_eq!(store.open().await, SchemaStatus::Migrated { from: 1 });
        assert_eq!(kv.raw(SCHEMA_VERSION).as_deref(), Some("2"));
        assert_eq!(store.open().await, SchemaStatus::Current);
    }

    #[tokio::test]
    async fn test_legacy_visit_keeps_streak() {
        let kv = InMemoryStore::with_entries([
            (LAST_VISIT_DATE, "Sat Jun 01 2024"),
            ("streak_count", "4"),
        ]);
        let store = open_over(&kv, FixedClock::ymd(2024, 6, 2));
        store.open().await;

        assert_eq!(kv.raw(LAST_VISIT_DATE).as_deref(), Some("2024-06-01"));
        let outcome = store.record_visit().await;
        assert_eq!(outcome.streak, 5);
        assert!(outcome.increased());
    }

    #[tokio::test]
    async fn test_legacy_adhkar_imported_and_kept() {
        let kv = InMemoryStore::with_entries([
            (LEGACY_ADHKAR_STREAK, "3"),
            (LEGACY_ADHKAR_DATE, "Fri May 31 2024"),
        ]);
        let store = open_over(&kv, FixedClock::ymd(2024, 6, 1));
        store.open().await;

        assert_eq!(store.adhkar_streak().await, 3);
        assert_eq!(kv.raw(LEGACY_ADHKAR_STREAK).as_deref(), Some("3"));
        assert_eq!(store.record_adhkar_completion().await.streak, 4);
    }

    #[tokio::test]
    async fn test_newer_schema_left_alone() {
        let kv = InMemoryStore::with_entries([(SCHEMA_VERSION, "7"), (LAST_VISIT_DATE, "x")]);
        let store = open_over(&kv, FixedClock::ymd(2024, 6, 1));
        assert_eq!(store.open().await, SchemaStatus::Newer { found: 7 });
        assert_eq!(kv.raw(SCHEMA_VERSION).as_deref(), Some("7"));
        assert_eq!(kv.raw(LAST_VISIT_DATE).as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_unavailable_storage() {
        let kv = InMemoryStore::new();
        kv.set_unavailable(true);
        let store = open_over(&kv, FixedClock::ymd(2024, 6, 1));
        assert_eq!(store.open().await, SchemaStatus::Unavailable);
    }
}
