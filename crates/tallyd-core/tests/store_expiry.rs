//! Store append / evict / sum behavior, driven by a manual clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tallyd_core::{Clock, ManualClock, Sample, Store};

const MINUTE: Duration = Duration::from_secs(60);

fn store_with_clock() -> (Store, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(SystemTime::UNIX_EPOCH + 1_000_000 * MINUTE));
    (Store::with_clock(clock.clone()), clock)
}

#[test]
fn absent_name_sums_to_zero() {
    let (mut store, _) = store_with_clock();
    let s = store.summarize("active_visitors", 60);
    assert_eq!(s.value, 0);
    assert_eq!(s.evicted, 0);
    assert!(!store.contains("active_visitors"));
}

#[test]
fn live_samples_are_summed() {
    let (mut store, _) = store_with_clock();
    store.append("active_visitors", 2);
    store.append("active_visitors", 1);
    assert_eq!(store.summarize("active_visitors", 60).value, 3);
}

#[test]
fn sum_ignores_append_order_and_sign() {
    let values = [5, -3, 40, 0, -12, 7];
    let (mut fwd, _) = store_with_clock();
    let (mut rev, _) = store_with_clock();
    for v in values {
        fwd.append("m", v);
    }
    for v in values.iter().rev() {
        rev.append("m", *v);
    }
    let expected: i64 = values.iter().sum();
    assert_eq!(fwd.summarize("m", u64::MAX).value, expected);
    assert_eq!(rev.summarize("m", u64::MAX).value, expected);
}

#[test]
fn two_hour_old_sample_is_evicted() {
    let (mut store, clock) = store_with_clock();
    store.append("active_visitors", 4);
    clock.advance(100 * MINUTE);
    store.append("active_visitors", 7);
    clock.advance(5 * MINUTE);
    store.append("active_visitors", 2);
    clock.advance(5 * MINUTE);
    store.append("active_visitors", 3);
    clock.advance(10 * MINUTE);

    assert_eq!(store.sample_count("active_visitors"), 4);
    let s = store.summarize("active_visitors", 60);
    assert_eq!(s.value, 12);
    assert_eq!(s.evicted, 1);
    assert_eq!(store.sample_count("active_visitors"), 3);
}

#[test]
fn seeded_historical_sample_is_evicted() {
    let (mut store, clock) = store_with_clock();
    let now = clock.now();
    store.record("m", Sample::new(4, now - 120 * MINUTE));
    store.record("m", Sample::new(7, now - 10 * MINUTE));
    assert_eq!(store.summarize("m", 60).value, 7);
    assert_eq!(store.sample_count("m"), 1);
}

#[test]
fn boundary_sample_is_retained() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 9);

    // 60m59s truncates to 60 whole minutes: not strictly greater than 60.
    clock.advance(60 * MINUTE + Duration::from_secs(59));
    assert_eq!(store.summarize("m", 60).value, 9);

    clock.advance(Duration::from_secs(1));
    let s = store.summarize("m", 60);
    assert_eq!(s.value, 0);
    assert_eq!(s.evicted, 1);
}

#[test]
fn zero_timeout_keeps_current_minute() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 1);
    clock.advance(Duration::from_secs(59));
    assert_eq!(store.summarize("m", 0).value, 1);
    clock.advance(Duration::from_secs(1));
    assert_eq!(store.summarize("m", 0).value, 0);
}

#[test]
fn fully_evicted_series_keeps_its_key() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 1);
    store.append("m", 2);
    clock.advance(90 * MINUTE);

    let s = store.summarize("m", 60);
    assert_eq!(s.value, 0);
    assert_eq!(s.evicted, 2);
    assert!(store.contains("m"));
    assert_eq!(store.sample_count("m"), 0);
}

#[test]
fn eviction_is_idempotent() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 4);
    clock.advance(30 * MINUTE);
    store.append("m", 5);
    clock.advance(40 * MINUTE);

    let first = store.summarize("m", 60);
    let second = store.summarize("m", 60);
    assert_eq!(first.value, 5);
    assert_eq!(first.evicted, 1);
    assert_eq!(second.value, 5);
    assert_eq!(second.evicted, 0);
}

#[test]
fn unread_names_keep_stale_samples() {
    let (mut store, clock) = store_with_clock();
    store.append("read", 1);
    store.append("unread", 1);
    clock.advance(120 * MINUTE);

    store.summarize("read", 60);
    assert_eq!(store.sample_count("read"), 0);
    assert_eq!(store.sample_count("unread"), 1);
}

#[test]
fn per_call_timeout_decides_what_survives() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 10);
    clock.advance(45 * MINUTE);
    store.append("m", 1);

    assert_eq!(store.summarize("m", 120).value, 11);
    assert_eq!(store.summarize("m", 30).value, 1);
    // Already evicted; a wider window cannot bring it back.
    assert_eq!(store.summarize("m", 120).value, 1);
}

#[test]
fn future_stamps_count_as_fresh() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 3);
    clock.rewind(10 * MINUTE);
    assert_eq!(store.summarize("m", 0).value, 3);
}

#[test]
fn evict_expired_reports_count_without_summing() {
    let (mut store, clock) = store_with_clock();
    store.append("m", 1);
    store.append("m", 1);
    clock.advance(61 * MINUTE);
    store.append("m", 1);

    assert_eq!(store.evict_expired("m", 60), 2);
    assert_eq!(store.evict_expired("m", 60), 0);
    assert_eq!(store.evict_expired("never", 60), 0);
}

#[test]
fn empty_name_is_a_valid_key() {
    let (mut store, _) = store_with_clock();
    store.append("", 8);
    assert!(store.contains(""));
    assert_eq!(store.summarize("", 60).value, 8);
    assert_eq!(store.len(), 1);
}

#[test]
fn sum_wraps_on_overflow() {
    let (mut store, _) = store_with_clock();
    store.append("m", i64::MAX);
    store.append("m", 1);
    assert_eq!(store.summarize("m", 60).value, i64::MIN);
}

#[test]
fn summary_serializes_value_only() {
    let (mut store, _) = store_with_clock();
    store.append("m", 42);
    let json = serde_json::to_string(&store.summarize("m", 60)).unwrap();
    assert_eq!(json, r#"{"value":42}"#);
}
