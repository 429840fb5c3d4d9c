//! Nullable clock: deterministic time for testing.

use certify_types::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<DateTime<Utc>>,
}

impl NullClock {
    pub fn new(initial: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(initial),
        }
    }

    /// Start at a Unix timestamp in milliseconds.
    pub fn at_millis(millis: i64) -> Self {
        Self::new(
            Utc.timestamp_millis_opt(millis)
                .single()
                .expect("millis within chrono range"),
        )
    }

    /// Start at midnight UTC of the given calendar date.
    pub fn at_date(year: i32, month: u32, day: u32) -> Self {
        Self::new(
            Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .expect("valid calendar date"),
        )
    }

    /// Advance time by a number of milliseconds.
    pub fn advance_millis(&self, millis: i64) {
        self.current
            .set(self.current.get() + Duration::milliseconds(millis));
    }

    /// Advance time by a number of days.
    pub fn advance_days(&self, days: i64) {
        self.current.set(self.current.get() + Duration::days(days));
    }

    /// Set the time to a specific value.
    pub fn set(&self, at: DateTime<Utc>) {
        self.current.set(at);
    }
}

impl Clock for NullClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_only_moves_when_told() {
        let clock = NullClock::at_millis(1_000);
        assert_eq!(clock.unix_millis(), 1_000);
        assert_eq!(clock.unix_millis(), 1_000);
        clock.advance_millis(250);
        assert_eq!(clock.unix_millis(), 1_250);
    }

    #[test]
    fn date_helpers() {
        let clock = NullClock::at_date(2024, 2, 28);
        clock.advance_days(1);
        assert_eq!(clock.today().to_string(), "2024-02-29");
        assert_eq!(clock.year(), 2024);
    }
}
