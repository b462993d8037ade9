//! Timestamp sources
//!
//! Record timestamps are display strings rendered in local time. The clock
//! is injected so tests and replays can pin it.

use chrono::{DateTime, Local, TimeZone};

/// Source of the current time
pub trait Clock {
    /// Current local time
    fn now(&self) -> DateTime<Local>;

    /// Current time rendered with a strftime `format`
    fn timestamp(&self, format: &str) -> String {
        self.now().format(format).to_string()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Pin the clock to `instant`
    pub fn new(instant: DateTime<Local>) -> Self {
        FixedClock { instant }
    }

    /// Pin the clock to a local calendar time
    ///
    /// Returns `None` when the time is invalid or does not exist locally.
    /// An ambiguous time resolves to its earlier instant.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .map(FixedClock::new)
    }

    /// Move the pinned instant forward
    pub fn advance(&mut self, by: chrono::Duration) {
        self.instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
