//! Canned remote content for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::lock;
use crate::models::ContentItem;
use crate::traits::ContentSource;

/// [`ContentSource`] returning whatever the test configured.
///
/// Unset values behave like a failed fetch.
#[derive(Debug, Clone, Default)]
pub struct MockContentSource {
    verse: Arc<Mutex<Option<ContentItem>>>,
    hadith: Arc<Mutex<Option<ContentItem>>>,
    adhkar: Arc<Mutex<Option<String>>>,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_verse(&self, item: Option<ContentItem>) {
        *lock(&self.verse) = item;
    }

    pub fn set_hadith(&self, item: Option<ContentItem>) {
        *lock(&self.hadith) = item;
    }

    pub fn set_adhkar_resource(&self, json: Option<&str>) {
        *lock(&self.adhkar) = json.map(str::to_string);
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn random_verse(&self) -> Option<ContentItem> {
        lock(&self.verse).clone()
    }

    async fn random_hadith(&self) -> Option<ContentItem> {
        lock(&self.hadith).clone()
    }

    async fn adhkar_resource(&self) -> Option<String> {
        lock(&self.adhkar).clone()
    }
}
