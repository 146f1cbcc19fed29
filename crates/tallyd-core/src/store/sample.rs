use std::time::SystemTime;

/// One timestamped value. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    value: i64,
    recorded_at: SystemTime,
}

impl Sample {
    pub fn new(value: i64, recorded_at: SystemTime) -> Self {
        Self { value, recorded_at }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Age at `now` truncated to whole minutes. Stamps from the future
    /// (clock stepped back) count as age zero.
    pub fn age_minutes(&self, now: SystemTime) -> u64 {
        now.duration_since(self.recorded_at)
            .map(|d| d.as_secs() / 60)
            .unwrap_or(0)
    }

    /// Strictly older than the timeout; a sample sitting exactly on the
    /// boundary is still live.
    pub fn is_expired(&self, now: SystemTime, timeout_minutes: u64) -> bool {
        self.age_minutes(now) > timeout_minutes
    }
}
