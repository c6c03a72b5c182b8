//! Settable clock for testing.

use chrono::{Duration as ChronoDuration, NaiveDate};
use std::sync::{Arc, Mutex};

use super::lock;
use crate::traits::Clock;

#[derive(Debug)]
struct ClockState {
    today: NaiveDate,
    now_millis: i64,
    hour: u32,
}

/// [`Clock`] pinned to a date that tests move by hand.
///
/// `now_millis` starts at midnight UTC of the initial date and moves with
/// [`FixedClock::advance_days`] and [`FixedClock::advance_millis`].
#[derive(Debug, Clone)]
pub struct FixedClock {
    state: Arc<Mutex<ClockState>>,
}

fn midnight_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: Arc::new(Mutex::new(ClockState {
                today,
                now_millis: midnight_millis(today),
                hour: 9,
            })),
        }
    }

    /// Clock at a calendar date. Panics on an invalid date (test helper).
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self::new(date),
            None => panic!("invalid test date {year}-{month}-{day}"),
        }
    }

    pub fn set_date(&self, date: NaiveDate) {
        let mut state = lock(&self.state);
        state.today = date;
        state.now_millis = midnight_millis(date);
    }

    pub fn advance_days(&self, days: i64) {
        let mut state = lock(&self.state);
        state.today += ChronoDuration::days(days);
        state.now_millis += days * 86_400_000;
    }

    /// Move wall-clock time without changing the calendar day.
    pub fn advance_millis(&self, millis: i64) {
        lock(&self.state).now_millis += millis;
    }

    pub fn set_hour(&self, hour: u32) {
        lock(&self.state).hour = hour;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        lock(&self.state).today
    }

    fn now_millis(&self) -> i64 {
        lock(&self.state).now_millis
    }

    fn hour(&self) -> u32 {
        lock(&self.state).hour
    }
}
