// ABOUTME: Shared helpers for intelligence integration tests
// ABOUTME: Builders for sleep entries with explicit dates and times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, dead_code)]

use somnia_core::models::SleepEntry;
use uuid::Uuid;

/// Build one history entry; cycle fields are placeholders since the
/// statistics only read dates and times.
pub fn entry(date: &str, bedtime: &str, wakeup: &str) -> SleepEntry {
    SleepEntry {
        id: Uuid::new_v4(),
        date: date.parse().unwrap(),
        bedtime: bedtime.parse().unwrap(),
        wakeup_time: wakeup.parse().unwrap(),
        complete_cycles: 5,
        partial_cycle: 0.0,
        ideal_bedtime: "23:15".parse().unwrap(),
        ideal_wakeup_time: "07:15".parse().unwrap(),
    }
}

/// Build a history from `(date, bedtime, wakeup)` triples
pub fn nights(rows: &[(&str, &str, &str)]) -> Vec<SleepEntry> {
    rows.iter().map(|(d, b, w)| entry(d, b, w)).collect()
}

/// `count` consecutive nights with identical times, starting at `start_date`
pub fn identical_nights(start_date: &str, count: usize, bedtime: &str, wakeup: &str) -> Vec<SleepEntry> {
    let start: chrono::NaiveDate = start_date.parse().unwrap();
    (0..count)
        .map(|offset| {
            let date = start + chrono::Days::new(offset as u64);
            entry(&date.to_string(), bedtime, wakeup)
        })
        .collect()
}
