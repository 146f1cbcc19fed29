//! Access gate: one process-wide lock in front of the [`Store`].
//!
//! Every append and every summarize takes the same mutex, so all store
//! operations are linearized. The guard never outlives a single call and is
//! never held across I/O or an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::Clock;
use crate::error::{MetricsError, Result};
use crate::store::{Sample, Store, Summary};

#[derive(Debug, Default)]
pub struct AccessGate {
    store: Mutex<Store>,
}

impl AccessGate {
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(Store::with_clock(clock))
    }

    // Each store operation leaves the map consistent, so a poisoned guard is
    // still usable.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    pub fn append(&self, name: &str, value: i64) {
        self.lock().append(name, value);
    }

    pub fn record(&self, name: &str, sample: Sample) {
        self.lock().record(name, sample);
    }

    pub fn summarize(&self, name: &str, timeout_minutes: u64) -> Summary {
        self.lock().summarize(name, timeout_minutes)
    }

    /// Like [`summarize`](Self::summarize) but fails for names that were never
    /// appended. The existence check and the summary share one acquisition.
    pub fn summarize_known(&self, name: &str, timeout_minutes: u64) -> Result<Summary> {
        let mut store = self.lock();
        if !store.contains(name) {
            return Err(MetricsError::UnknownMetric(name.to_owned()));
        }
        Ok(store.summarize(name, timeout_minutes))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    pub fn sample_count(&self, name: &str) -> usize {
        self.lock().sample_count(name)
    }

    /// Number of metric names tracked.
    pub fn names(&self) -> usize {
        self.lock().len()
    }
}
