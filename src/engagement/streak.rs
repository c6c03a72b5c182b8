//! The day-adjacency streak rule and monthly aggregation.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{StreakChange, StreakState};
use crate::traits::{date_key, month_prefix, parse_date_key};

/// Format used by date keys written before ISO keys.
const LEGACY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Parse a stored date, accepting ISO keys and the legacy
/// `Sat Jun 01 2024` form.
pub fn parse_stored_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    parse_date_key(value).or_else(|| NaiveDate::parse_from_str(value, LEGACY_DATE_FORMAT).ok())
}

impl StreakState {
    /// Log `today` against this streak.
    ///
    /// Same day: unchanged. Day after the last log: +1. Anything else
    /// (first log, gap, clock moved backwards): reset to 1.
    pub fn advance(&mut self, today: NaiveDate) -> StreakChange {
        let last = self.last_log_date.as_deref().and_then(parse_stored_date);
        let change = match last {
            Some(day) if day == today => return StreakChange::Unchanged,
            Some(day) if day.succ_opt() == Some(today) => StreakChange::Increased,
            _ => StreakChange::Reset,
        };
        self.streak = match change {
            StreakChange::Increased => self.streak.saturating_add(1),
            _ => 1,
        };
        self.last_log_date = Some(date_key(today));
        change
    }
}

/// Sum of the counts whose date falls in `today`'s month.
pub fn month_count(history: &BTreeMap<String, u32>, today: NaiveDate) -> u32 {
    let prefix = month_prefix(today);
    history
        .iter()
        .filter(|(day, _)| day.starts_with(&prefix))
        .map(|(_, count)| *count)
        .fold(0u32, u32::saturating_add)
}
