//! Calendar clock abstraction.
//!
//! Every day-keyed record is written with the date this clock reports, so
//! a single clock instance defines the canonical day boundary.

use chrono::NaiveDate;

/// Source of "today" and wall-clock time.
pub trait Clock: Send + Sync {
    /// Current calendar day in the clock's day boundary.
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the unix epoch.
    fn now_millis(&self) -> i64;

    /// Hour of day (0-23) in the clock's day boundary.
    fn hour(&self) -> u32;
}

/// ISO `YYYY-MM-DD` key for a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` prefix shared by every day key of the date's month.
pub fn month_prefix(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Parse a stored day key. Unparseable keys yield `None`.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
