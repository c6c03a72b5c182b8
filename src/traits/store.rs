//! Key-value store trait abstraction.
//!
//! The engagement store never touches ambient storage directly; it is handed
//! a [`KeyValueStore`] so tests can run against an in-memory fake.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// Storage is disabled or cannot be opened
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// No space left for the write
    #[error("Storage quota exceeded")]
    QuotaExceeded,
    /// IO error
    #[error("IO error: {0}")]
    Io(String),
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The operation did not complete within its timeout
    #[error("Storage operation timed out after {after_ms} ms")]
    TimedOut { after_ms: u64 },
}

impl StoreError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "E_STORE_UNAVAILABLE",
            StoreError::QuotaExceeded => "E_STORE_QUOTA",
            StoreError::Io(_) => "E_STORE_IO",
            StoreError::Serialization(_) => "E_STORE_SERDE",
            StoreError::TimedOut { .. } => "E_STORE_TIMEOUT",
        }
    }
}

/// ENOSPC / EDQUOT on unix-likes.
const NO_SPACE_OS_ERRORS: [i32; 2] = [28, 122];

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        if err
            .raw_os_error()
            .is_some_and(|code| NO_SPACE_OS_ERRORS.contains(&code))
        {
            return StoreError::QuotaExceeded;
        }
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Process-wide string key-value storage.
///
/// Last writer wins; there is no transactional isolation between
/// read-modify-write sequences.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// List every key starting with `prefix`, in ascending order.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}
