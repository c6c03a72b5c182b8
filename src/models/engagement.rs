//! Persisted engagement records and the stats derived from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::content::ContentItem;

/// Consecutive-day streak for one counter domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    pub streak: u32,
    /// ISO date (`YYYY-MM-DD`) of the last logged day.
    #[serde(default)]
    pub last_log_date: Option<String>,
}

/// How a streak moved when a day was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already logged today.
    Unchanged,
    /// Logged on the day right after the previous log.
    Increased,
    /// First log ever, or a gap of more than one day.
    Reset,
}

/// Per-tally-domain blob: daily counts plus the domain's streak.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyRecord {
    /// ISO date -> count for that day.
    #[serde(default)]
    pub history: BTreeMap<String, u32>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_log_date: Option<String>,
}

impl TallyRecord {
    pub fn streak_state(&self) -> StreakState {
        StreakState {
            streak: self.streak,
            last_log_date: self.last_log_date.clone(),
        }
    }

    pub fn set_streak_state(&mut self, state: StreakState) {
        self.streak = state.streak;
        self.last_log_date = state.last_log_date;
    }
}

/// Aggregates shown under a tasbeeh counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TallyStats {
    pub today: u32,
    pub streak: u32,
    pub month: u32,
}

/// Result of logging a day against a streak domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOutcome {
    pub streak: u32,
    pub change: StreakChange,
}

impl VisitOutcome {
    /// Outcome used when storage is unavailable.
    pub fn degraded() -> Self {
        Self {
            streak: 0,
            change: StreakChange::Unchanged,
        }
    }

    pub fn increased(&self) -> bool {
        self.change == StreakChange::Increased
    }
}

/// A viewed item with the epoch-millis time it was last viewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    #[serde(flatten)]
    pub item: ContentItem,
    pub viewed_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;

    #[test]
    fn test_tally_record_json_shape() {
        let mut record = TallyRecord::default();
        record.history.insert("2024-06-01".to_string(), 3);
        record.streak = 1;
        record.last_log_date = Some("2024-06-01".to_string());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["history"]["2024-06-01"], 3);
        assert_eq!(value["streak"], 1);
        assert_eq!(value["lastLogDate"], "2024-06-01");
    }

    #[test]
    fn test_tally_record_reads_null_last_log() {
        let record: TallyRecord =
            serde_json::from_str(r#"{"history":{},"streak":0,"lastLogDate":null}"#).unwrap();
        assert_eq!(record, TallyRecord::default());
    }

    #[test]
    fn test_history_record_flattens_item() {
        let record = HistoryRecord {
            item: ContentItem::new("name-1", ContentType::NamesOfAllah, "a", "b", "c", "Name #1"),
            viewed_at: 1_717_200_000_000,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "name-1");
        assert_eq!(value["viewedAt"], 1_717_200_000_000i64);

        let back: HistoryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
