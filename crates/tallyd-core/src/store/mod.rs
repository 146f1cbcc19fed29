//! Time-windowed sample store.
//!
//! Each metric name maps to an unordered `Vec<Sample>`. Expiry is lazy: samples
//! are only dropped when their own name is summarized, so a name that is
//! written but never read keeps every sample it ever received.
//!
//! The store itself is not synchronized; wrap it in an
//! [`AccessGate`](crate::gate::AccessGate) to share it between requests.

mod sample;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use serde::Serialize;

use crate::clock::{Clock, SystemClock};

pub use sample::Sample;

/// Result of a summarize call. Only `value` goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub value: i64,
    /// Clock reading used for the expiry check.
    #[serde(skip)]
    pub as_of: SystemTime,
    /// Samples dropped by this call.
    #[serde(skip)]
    pub evicted: usize,
}

pub struct Store {
    series: HashMap<String, Vec<Sample>>,
    clock: Arc<dyn Clock>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            series: HashMap::new(),
            clock,
        }
    }

    /// Append `value` under `name`, stamped with the store clock.
    pub fn append(&mut self, name: &str, value: i64) {
        let sample = Sample::new(value, self.clock.now());
        self.record(name, sample);
    }

    /// Append an already-stamped sample. Creates the series if needed.
    pub fn record(&mut self, name: &str, sample: Sample) {
        match self.series.get_mut(name) {
            Some(samples) => samples.push(sample),
            None => {
                self.series.insert(name.to_owned(), vec![sample]);
            }
        }
    }

    /// Drop expired samples for `name`, then sum what is left.
    ///
    /// Absent and empty series both sum to 0. A series emptied by eviction
    /// keeps its key.
    pub fn summarize(&mut self, name: &str, timeout_minutes: u64) -> Summary {
        let now = self.clock.now();
        let evicted = self.evict_at(name, timeout_minutes, now);
        let value = self
            .series
            .get(name)
            .map(|samples| {
                samples
                    .iter()
                    .fold(0i64, |acc, s| acc.wrapping_add(s.value()))
            })
            .unwrap_or(0);

        Summary {
            value,
            as_of: now,
            evicted,
        }
    }

    /// Eviction pass alone. Returns how many samples were removed.
    pub fn evict_expired(&mut self, name: &str, timeout_minutes: u64) -> usize {
        let now = self.clock.now();
        self.evict_at(name, timeout_minutes, now)
    }

    fn evict_at(&mut self, name: &str, timeout_minutes: u64, now: SystemTime) -> usize {
        let Some(samples) = self.series.get_mut(name) else {
            return 0;
        };

        let before = samples.len();
        samples.retain(|s| !s.is_expired(now, timeout_minutes));
        let evicted = before - samples.len();

        if evicted > 0 {
            tracing::debug!(
                metric = %name,
                evicted,
                remaining = samples.len(),
                timeout_minutes,
                "evicted expired samples"
            );
        }
        evicted
    }

    /// Whether `name` was ever appended (it may hold zero samples).
    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    /// Samples currently held for `name`, expired or not.
    pub fn sample_count(&self, name: &str) -> usize {
        self.series.get(name).map_or(0, Vec::len)
    }

    /// Number of metric names tracked.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("names", &self.series.len())
            .finish_non_exhaustive()
    }
}
