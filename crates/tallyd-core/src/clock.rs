//! Wall-clock source for sample timestamps and expiry checks.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime};

/// Source of "now" for the store.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Settable clock. Starts at the instant it was created and only moves when
/// told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<SystemTime>,
}

impl ManualClock {
    pub fn new(start: SystemTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut g = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *g += by;
    }

    /// Step backwards, e.g. to simulate an NTP correction.
    pub fn rewind(&self, by: Duration) {
        let mut g = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *g = g.checked_sub(by).unwrap_or(SystemTime::UNIX_EPOCH);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(SystemTime::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
