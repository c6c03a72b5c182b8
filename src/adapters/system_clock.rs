//! Wall-clock adapter.

use chrono::{Local, NaiveDate, Timelike, Utc};

use crate::config::DayBoundary;
use crate::traits::Clock;

/// [`Clock`] backed by the system time, in the configured day boundary.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    boundary: DayBoundary,
}

impl SystemClock {
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> DayBoundary {
        self.boundary
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DayBoundary::Local)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.boundary {
            DayBoundary::Local => Local::now().date_naive(),
            DayBoundary::Utc => Utc::now().date_naive(),
        }
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn hour(&self) -> u32 {
        match self.boundary {
            DayBoundary::Local => Local::now().hour(),
            DayBoundary::Utc => Utc::now().hour(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_clock_matches_chrono() {
        let clock = SystemClock::new(DayBoundary::Utc);
        let before = Utc::now().date_naive();
        let today = clock.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
        assert!(clock.hour() < 24);
        assert!(clock.now_millis() > 1_700_000_000_000);
    }
}
