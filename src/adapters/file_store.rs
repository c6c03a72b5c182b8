//! JSON-file key-value store.
//!
//! All keys live in a single JSON object on disk (`~/.ihsan/store.json` by
//! default). The file is loaded lazily on first access and rewritten
//! atomically (temp file + rename) on every mutation. A file that does not
//! parse is moved aside to `store.json.corrupt` and the store starts empty.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::warn;

use crate::traits::{KeyValueStore, StoreError};

/// File-backed [`KeyValueStore`].
///
/// # Example
///
/// ```ignore
/// use ihsan::adapters::FileStore;
/// use ihsan::traits::KeyValueStore;
///
/// let store = FileStore::new("/tmp/ihsan/store.json");
/// store.set("streak_count", "3").await?;
/// assert_eq!(store.get("streak_count").await?.as_deref(), Some("3"));
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<Option<BTreeMap<String, String>>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Mutex::new(None),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unparseable store file is moved.
    pub fn quarantine_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    async fn read_file(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let aside = self.quarantine_path();
                warn!(
                    path = %self.path.display(),
                    moved_to = %aside.display(),
                    error = %e,
                    "Store file is corrupt, starting empty"
                );
                // Next write recreates the file either way.
                if let Err(e) = tokio::fs::rename(&self.path, &aside).await {
                    warn!(error = %e, "Could not move corrupt store file aside");
                }
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_file(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Run `f` against the loaded entries, loading them first if needed.
    async fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> T,
    ) -> Result<T, StoreError> {
        let mut guard = self.entries.lock().await;
        if guard.is_none() {
            *guard = Some(self.read_file().await?);
        }
        Ok(f(guard.get_or_insert_with(BTreeMap::new)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_entries(|e| e.get(key).cloned()).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().await;
        let mut entries = match guard.take() {
            Some(entries) => entries,
            None => self.read_file().await?,
        };
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_file(&entries).await {
            // Keep memory in step with disk.
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            *guard = Some(entries);
            return Err(e);
        }
        *guard = Some(entries);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().await;
        let mut entries = match guard.take() {
            Some(entries) => entries,
            None => self.read_file().await?,
        };
        let previous = entries.remove(key);
        if previous.is_some() {
            if let Err(e) = self.write_file(&entries).await {
                if let Some(old) = previous {
                    entries.insert(key.to_string(), old);
                }
                *guard = Some(entries);
                return Err(e);
            }
        }
        *guard = Some(entries);
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.with_entries(|e| {
            e.keys()
                .filter(|k| k.starts_with(prefix))
                .cloned()
                .collect()
        })
        .await
    }
}
