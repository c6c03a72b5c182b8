//! Engagement state: visit streak, tally counters, favorites and history.
//!
//! Everything is recomputed from the injected [`KeyValueStore`] on each
//! call. Storage trouble never reaches the caller: operations log a warning
//! and return default or zero state, because engagement tracking is not on
//! the critical path of viewing content.
//!
//! Day keys come from the injected [`Clock`], so one clock instance defines
//! the day boundary for every record.

pub mod collections;
pub mod keys;
pub mod schema;
pub mod streak;
pub mod tally;
pub mod visits;

pub use schema::{SchemaStatus, CURRENT_SCHEMA_VERSION};
pub use streak::{month_count, parse_stored_date};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::config::IhsanConfig;
use crate::error::{ErrorContext, IhsanError};
use crate::traits::{Clock, KeyValueStore, StoreError};

const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Durable engagement counters over an injected store and clock.
#[derive(Clone)]
pub struct EngagementStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    storage_timeout: Duration,
    history_limit: usize,
}

impl std::fmt::Debug for EngagementStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngagementStore")
            .field("storage_timeout", &self.storage_timeout)
            .field("history_limit", &self.history_limit)
            .finish_non_exhaustive()
    }
}

impl EngagementStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Store using the timeouts and limits from `config`.
    pub fn from_config(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config: &IhsanConfig,
    ) -> Self {
        Self::new(store, clock)
            .with_storage_timeout(config.timeouts.storage)
            .with_history_limit(config.history_limit)
    }

    pub fn with_storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = timeout;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.storage_timeout, fut)
            .await
            .map_err(|_| StoreError::TimedOut {
                after_ms: self.storage_timeout.as_millis() as u64,
            })?
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.bounded(self.store.get(key)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.bounded(self.store.set(key, value)).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.bounded(self.store.remove(key)).await
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.bounded(self.store.keys_with_prefix(prefix)).await
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Like [`Self::read_json`], but a corrupt value reads as the default
    /// so the next write replaces it.
    async fn read_json_or_default<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        match self.read_json(key).await {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(StoreError::Serialization(message)) => {
                warn!(key, %message, "Discarding unreadable record");
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw).await
    }
}

/// Log a swallowed storage failure and hand back `fallback`.
fn degrade<T>(operation: &str, key: &str, err: StoreError, fallback: T) -> T {
    let err = IhsanError::from(err)
        .with_context(ErrorContext::new(operation).with_key(key).with_component("engagement"));
    warn!(error = %err, code = err.error_code(), "Engagement storage failed; using default");
    fallback
}
