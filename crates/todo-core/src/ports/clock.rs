//! Clock port - time source abstraction.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// A trait so tests can pin the clock (`FixedClock`) while production
/// code reads the system time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System time (production).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time (tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
