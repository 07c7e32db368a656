// ABOUTME: Unit tests for core domain models
// ABOUTME: ClockTime round trips, settings bounds, and reminder schedule validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Weekday;
use somnia_core::models::{ClockTime, ReminderSchedule, Settings};

#[test]
fn every_clock_time_round_trips_through_its_minute_offset() {
    for hour in 0..24u8 {
        for minute in 0..60u8 {
            let time = ClockTime::new(hour, minute).unwrap();
            assert_eq!(ClockTime::from_minute_of_day(time.minute_of_day()), time);
            assert_eq!(time.to_string().parse::<ClockTime>().unwrap(), time);
        }
    }
}

#[test]
fn settings_bounds_are_enforced_at_both_ends() {
    for cycle_length in [59, 121] {
        let settings = Settings {
            cycle_length_minutes: cycle_length,
            ..Settings::default()
        };
        assert!(settings.validate().is_err(), "{cycle_length} must be rejected");
    }
    for cycle_length in [60, 90, 120] {
        let settings = Settings {
            cycle_length_minutes: cycle_length,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok(), "{cycle_length} must be accepted");
    }
}

fn reminder() -> ReminderSchedule {
    ReminderSchedule {
        wake_up_time: "07:00".parse().unwrap(),
        days_of_week: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed],
        wind_down_minutes: 30,
        cycle_length_minutes: 90,
        sleep_latency_minutes: 15,
        enabled: true,
    }
}

#[test]
fn reminder_schedule_accepts_the_wider_cycle_range() {
    // The delivery boundary accepts up to 150 minutes, unlike settings
    let mut schedule = reminder();
    schedule.cycle_length_minutes = 150;
    assert!(schedule.validate().is_ok());

    schedule.cycle_length_minutes = 151;
    assert!(schedule.validate().is_err());
}

#[test]
fn reminder_schedule_requires_at_least_one_day() {
    let mut schedule = reminder();
    schedule.days_of_week.clear();
    assert!(schedule.validate().is_err());
}

#[test]
fn reminder_schedule_bounds_wind_down_and_latency() {
    let mut schedule = reminder();
    schedule.wind_down_minutes = 121;
    assert!(schedule.validate().is_err());

    let mut schedule = reminder();
    schedule.sleep_latency_minutes = 61;
    assert!(schedule.validate().is_err());
}
