// ABOUTME: Unit tests for schedule statistics
// ABOUTME: Minimum sample guard, variance behavior, weekend fallback, and score bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{identical_nights, nights};
use somnia_intelligence::config::ConsistencyScoringConfig;
use somnia_intelligence::schedule_analysis::ScheduleAnalyzer;

fn config() -> ConsistencyScoringConfig {
    ConsistencyScoringConfig::default()
}

#[test]
fn below_three_entries_there_are_no_statistics() {
    let entries = identical_nights("2025-06-02", 2, "22:30", "06:30");
    assert!(ScheduleAnalyzer::analyze(&entries, &config()).is_none());
}

#[test]
fn a_perfectly_regular_week_scores_one_hundred() {
    // Identical times every night, weekend included: zero variance and a
    // zero weekday/weekend gap leave nothing to penalize
    let entries = identical_nights("2025-06-02", 7, "22:30", "06:30");
    let stats = ScheduleAnalyzer::analyze(&entries, &config()).unwrap();

    assert_eq!(stats.bedtime_variance_minutes, 0);
    assert_eq!(stats.wakeup_variance_minutes, 0);
    assert_eq!(stats.consistency_score, 100);
    assert_eq!(stats.data_points, 7);
}

#[test]
fn averages_cross_midnight_without_wraparound() {
    let entries = nights(&[
        ("2025-06-02", "23:30", "07:00"),
        ("2025-06-03", "00:30", "07:00"),
        ("2025-06-04", "23:30", "07:00"),
        ("2025-06-05", "00:30", "07:00"),
    ]);
    let stats = ScheduleAnalyzer::analyze(&entries, &config()).unwrap();

    // 23:30 and 00:30 average to midnight (1440 in the night-anchored
    // domain), not midday
    assert_eq!(stats.avg_bedtime_minutes, 1440);
    assert_eq!(stats.suggested_bedtime().to_string(), "00:00");
}

#[test]
fn weekend_averages_fall_back_without_weekend_data() {
    // Monday through Friday only
    let entries = identical_nights("2025-06-02", 5, "22:00", "06:30");
    let stats = ScheduleAnalyzer::analyze(&entries, &config()).unwrap();

    assert_eq!(stats.weekend_avg_bedtime, stats.avg_bedtime_minutes);
    assert_eq!(stats.weekend_avg_wakeup, stats.avg_wakeup_minutes);
    assert_eq!(stats.consistency_score, 100);
}

#[test]
fn erratic_schedules_still_score_within_bounds() {
    let entries = nights(&[
        ("2025-06-01", "21:00", "06:30"),
        ("2025-06-02", "23:30", "08:00"),
        ("2025-06-03", "20:30", "06:15"),
        ("2025-06-04", "23:00", "07:45"),
        ("2025-06-05", "21:30", "06:45"),
        ("2025-06-06", "00:30", "08:30"),
        ("2025-06-07", "22:00", "07:00"),
    ]);
    let stats = ScheduleAnalyzer::analyze(&entries, &config()).unwrap();

    assert!(stats.consistency_score <= 100);
    assert!(stats.bedtime_variance_minutes > 30);
    assert!(stats.consistency_score < 80, "erratic week must not look consistent");
}

#[test]
fn weekend_gap_alone_lowers_the_score() {
    // Identical times within each group, with a 90-minute weekend shift
    let entries = nights(&[
        ("2025-06-02", "22:00", "06:30"),
        ("2025-06-03", "22:00", "06:30"),
        ("2025-06-04", "22:00", "06:30"),
        ("2025-06-05", "22:00", "06:30"),
        ("2025-06-06", "22:00", "06:30"),
        ("2025-06-07", "23:30", "08:00"),
        ("2025-06-08", "23:30", "08:00"),
    ]);
    let stats = ScheduleAnalyzer::analyze(&entries, &config()).unwrap();

    assert_eq!(stats.weekday_avg_bedtime, 1320);
    assert_eq!(stats.weekend_avg_bedtime, 1410);
    assert!(stats.consistency_score < 100);
}
