//! In-memory key-value store for testing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::lock;
use crate::traits::{KeyValueStore, StoreError};

/// In-memory key-value store for testing.
///
/// # Example
///
/// ```ignore
/// use ihsan::adapters::mock::InMemoryStore;
/// use ihsan::traits::{KeyValueStore, StoreError};
///
/// let store = InMemoryStore::new();
/// store.set("streak_count", "2").await?;
/// assert_eq!(store.raw("streak_count"), Some("2".to_string()));
///
/// // Simulate a full disk
/// store.set_write_error(Some(StoreError::QuotaExceeded));
/// assert!(store.set("streak_count", "3").await.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
    read_error: Arc<Mutex<Option<StoreError>>>,
    write_error: Arc<Mutex<Option<StoreError>>>,
    /// Every call sleeps this long first.
    delay: Arc<Mutex<Option<Duration>>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        {
            let mut map = lock(&store.entries);
            for (k, v) in entries {
                map.insert(k.into(), v.into());
            }
        }
        store
    }

    /// Make `get` and `keys_with_prefix` fail with `error`.
    pub fn set_read_error(&self, error: Option<StoreError>) {
        *lock(&self.read_error) = error;
    }

    /// Make `set` and `remove` fail with `error`.
    pub fn set_write_error(&self, error: Option<StoreError>) {
        *lock(&self.write_error) = error;
    }

    /// Fail every operation as if storage were disabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        let error = unavailable.then(|| StoreError::Unavailable("storage disabled".to_string()));
        self.set_read_error(error.clone());
        self.set_write_error(error);
    }

    /// Delay every operation, to exercise caller timeouts.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *lock(&self.delay) = delay;
    }

    /// Read a value synchronously (for assertions).
    pub fn raw(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    /// Write a value synchronously (for test setup).
    pub fn insert(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_string(), value.to_string());
    }

    /// All entries (for assertions).
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        lock(&self.entries).clone()
    }

    /// Number of successful `set`/`remove` calls.
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }

    async fn pause(&self) {
        let delay = *lock(&self.delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn check_read(&self) -> Result<(), StoreError> {
        match lock(&self.read_error).clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), StoreError> {
        match lock(&self.write_error).clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.pause().await;
        self.check_read()?;
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.pause().await;
        self.check_write()?;
        self.insert(key, value);
        *lock(&self.writes) += 1;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.pause().await;
        self.check_write()?;
        lock(&self.entries).remove(key);
        *lock(&self.writes) += 1;
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.pause().await;
        self.check_read()?;
        Ok(lock(&self.entries)
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
