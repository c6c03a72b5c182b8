//! Tap counter over one tasbeeh phrase.

use crate::content::{TasbeehPhrase, TASBEEH_PHRASES};
use crate::engagement::EngagementStore;
use crate::models::TallyStats;

/// A counting session: the session count lives in memory, every tap is
/// also logged to the phrase's persistent tally.
#[derive(Debug, Clone)]
pub struct TasbeehCounter {
    store: EngagementStore,
    phrase: &'static TasbeehPhrase,
    session_count: u32,
    stats: TallyStats,
}

impl TasbeehCounter {
    /// Start on the first phrase of the catalogue.
    pub async fn start(store: EngagementStore) -> Self {
        let phrase = &TASBEEH_PHRASES[0];
        let stats = store.tally_stats(phrase.id).await;
        Self {
            store,
            phrase,
            session_count: 0,
            stats,
        }
    }

    pub fn phrase(&self) -> &'static TasbeehPhrase {
        self.phrase
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    /// Stats as of the last tap or selection.
    pub fn stats(&self) -> TallyStats {
        self.stats
    }

    pub async fn tap(&mut self) -> TallyStats {
        self.session_count = self.session_count.saturating_add(1);
        self.stats = self.store.increment_tally(self.phrase.id).await;
        self.stats
    }

    /// Zero the session count. The persistent tally is untouched.
    pub fn reset_session(&mut self) {
        self.session_count = 0;
    }

    /// Switch phrase; starts a new session.
    pub async fn select(&mut self, phrase: &'static TasbeehPhrase) {
        self.phrase = phrase;
        self.session_count = 0;
        self.stats = self.store.tally_stats(phrase.id).await;
    }
}
