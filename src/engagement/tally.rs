//! Per-phrase tally counters.

use chrono::NaiveDate;
use tracing::debug;

use super::keys::tally_key;
use super::streak::month_count;
use super::{degrade, EngagementStore};
use crate::models::{TallyRecord, TallyStats};
use crate::traits::{date_key, StoreError};

fn stats_for(record: &TallyRecord, today: NaiveDate) -> TallyStats {
    TallyStats {
        today: record.history.get(&date_key(today)).copied().unwrap_or(0),
        streak: record.streak,
        month: month_count(&record.history, today),
    }
}

impl EngagementStore {
    /// Count one recitation of `domain` today and return the fresh stats.
    pub async fn increment_tally(&self, domain: &str) -> TallyStats {
        let key = tally_key(domain);
        let result = async {
            let today = self.clock.today();
            let mut record: TallyRecord = self.read_json_or_default(&key).await?;

            let slot = record.history.entry(date_key(today)).or_insert(0);
            *slot = slot.saturating_add(1);

            let mut streak = record.streak_state();
            streak.advance(today);
            record.set_streak_state(streak);

            self.write_json(&key, &record).await?;
            let stats = stats_for(&record, today);
            debug!(domain, today = stats.today, streak = stats.streak, "Tally incremented");
            Ok::<_, StoreError>(stats)
        }
        .await;

        result.unwrap_or_else(|e| degrade("increment_tally", &key, e, TallyStats::default()))
    }

    /// Stats for `domain` without counting anything.
    pub async fn tally_stats(&self, domain: &str) -> TallyStats {
        let key = tally_key(domain);
        let today = self.clock.today();
        match self.read_json_or_default::<TallyRecord>(&key).await {
            Ok(record) => stats_for(&record, today),
            Err(e) => degrade("tally_stats", &key, e, TallyStats::default()),
        }
    }
}
