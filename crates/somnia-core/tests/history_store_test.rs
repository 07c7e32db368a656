// ABOUTME: Unit tests for the in-memory history store
// ABOUTME: Ordering, identifier assignment, retention cap, eviction, and clearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use somnia_core::history::{HistoryStore, InMemoryHistory, MAX_HISTORY_ENTRIES};
use somnia_core::models::{ClockTime, NewSleepEntry};

fn entry_for_day(day_offset: u32) -> NewSleepEntry {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .checked_add_days(chrono::Days::new(u64::from(day_offset)))
        .unwrap();
    NewSleepEntry {
        date,
        bedtime: "22:30".parse().unwrap(),
        wakeup_time: "06:45".parse().unwrap(),
        complete_cycles: 5,
        partial_cycle: 0.5,
        ideal_bedtime: "22:45".parse().unwrap(),
        ideal_wakeup_time: "07:00".parse().unwrap(),
    }
}

#[test]
fn append_assigns_unique_ids_and_prepends() {
    let mut store = InMemoryHistory::new();
    let first = store.append(entry_for_day(0)).unwrap();
    let second = store.append(entry_for_day(1)).unwrap();

    assert_ne!(first.id, second.id);

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, second.id, "newest entry must come first");
    assert_eq!(loaded[1].id, first.id);
}

#[test]
fn history_is_capped_with_oldest_evicted_first() {
    let mut store = InMemoryHistory::new();
    let mut ids = Vec::new();
    for day in 0..110 {
        ids.push(store.append(entry_for_day(day)).unwrap().id);
    }

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), MAX_HISTORY_ENTRIES);
    // Newest append is at the front; the ten oldest ids fell off the tail
    assert_eq!(loaded[0].id, ids[109]);
    assert_eq!(loaded[MAX_HISTORY_ENTRIES - 1].id, ids[10]);
}

#[test]
fn append_rejects_invalid_partial_cycle() {
    let mut store = InMemoryHistory::new();
    let mut bad = entry_for_day(0);
    bad.partial_cycle = 1.5;
    assert!(store.append(bad).is_err());
    assert!(store.is_empty());
}

#[test]
fn clear_removes_everything() {
    let mut store = InMemoryHistory::new();
    store.append(entry_for_day(0)).unwrap();
    store.append(entry_for_day(1)).unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn entries_serialize_times_as_clock_strings() {
    let mut store = InMemoryHistory::new();
    let entry = store.append(entry_for_day(0)).unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["bedtime"], "22:30");
    assert_eq!(json["wakeup_time"], "06:45");
    assert_eq!(json["date"], "2025-01-01");

    let bedtime: ClockTime = serde_json::from_value(json["bedtime"].clone()).unwrap();
    assert_eq!(bedtime, entry.bedtime);
}
