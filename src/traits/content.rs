//! Remote content collaborators.
//!
//! Verse and saying fetches are third-party services; the crate consumes
//! them as opaque async functions and never implements the HTTP side.

use async_trait::async_trait;

use crate::models::ContentItem;

/// Source of remotely fetched reminders.
///
/// Every method resolves to `None` on any failure; the caller keeps
/// showing the current card.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// A random Quran verse with its translations.
    async fn random_verse(&self) -> Option<ContentItem>;

    /// A random hadith.
    async fn random_hadith(&self) -> Option<ContentItem>;

    /// Raw JSON of the adhkar resource, parsed by [`crate::content::adhkar_for`].
    async fn adhkar_resource(&self) -> Option<String>;
}
