//! Time source used for issue dates, generated ids and audit timestamps.
//!
//! Everything that needs "now" goes through [`Clock`] so tests can pin time
//! (see `certify-nullables`).

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::rc::Rc;

/// A source of the current UTC time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current four-digit year.
    fn year(&self) -> i32 {
        self.now().year()
    }

    /// Milliseconds since the Unix epoch.
    fn unix_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
