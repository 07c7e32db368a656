// ABOUTME: Unit tests for bedtime reminder planning
// ABOUTME: Target bedtimes, wind-down windows, due-schedule scans, and channel dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::cell::RefCell;

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use somnia_core::clock::FixedClock;
use somnia_core::errors::{AppError, AppResult};
use somnia_core::models::{ClockTime, ReminderSchedule};
use somnia_core::notifications::{NotificationChannel, PushNotification};
use somnia_intelligence::config::CycleConfig;
use somnia_intelligence::reminders::ReminderPlanner;

fn at(time: &str) -> ClockTime {
    time.parse().unwrap()
}

/// Wednesday 2025-06-04 at the given wall-clock time
fn wednesday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 4)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn schedule() -> ReminderSchedule {
    ReminderSchedule {
        wake_up_time: at("07:00"),
        days_of_week: vec![Weekday::Wed],
        wind_down_minutes: 30,
        cycle_length_minutes: 90,
        sleep_latency_minutes: 15,
        enabled: true,
    }
}

#[derive(Default)]
struct RecordingChannel {
    sent: RefCell<Vec<(String, PushNotification)>>,
}

impl NotificationChannel for RecordingChannel {
    fn send(&self, token: &str, notification: &PushNotification) -> AppResult<()> {
        self.sent
            .borrow_mut()
            .push((token.to_owned(), notification.clone()));
        Ok(())
    }
}

struct FailingChannel;

impl NotificationChannel for FailingChannel {
    fn send(&self, _token: &str, _notification: &PushNotification) -> AppResult<()> {
        Err(AppError::internal("transport unavailable"))
    }
}

#[test]
fn target_bedtime_walks_back_from_the_wake_up() {
    // Five 90-minute cycles plus 15 minutes latency before a 07:00 wake-up
    let bedtime = ReminderPlanner::target_bedtime(at("07:00"), 90, 15, 5);
    assert_eq!(bedtime, at("23:15"));
}

#[test]
fn wind_down_window_is_exclusive_at_bedtime_and_inclusive_at_the_edge() {
    let target = at("23:15");

    assert!(ReminderPlanner::should_notify(target, 30, at("22:50")));
    assert!(ReminderPlanner::should_notify(target, 30, at("22:45")), "edge of window");
    assert!(!ReminderPlanner::should_notify(target, 30, at("23:15")), "bedtime itself");
    assert!(!ReminderPlanner::should_notify(target, 30, at("22:30")), "too early");
}

#[test]
fn due_schedules_match_weekday_window_and_enabled_flag() {
    let config = CycleConfig::default();
    let in_window = FixedClock::at(wednesday_at(22, 50));

    let enabled = schedule();
    let mut disabled = schedule();
    disabled.enabled = false;
    let mut wrong_day = schedule();
    wrong_day.days_of_week = vec![Weekday::Thu];

    let schedules = vec![enabled, disabled, wrong_day];
    let due = ReminderPlanner::due_schedules(&schedules, &config, &in_window);
    assert_eq!(due.len(), 1);
    assert!(due[0].enabled);

    let too_early = FixedClock::at(wednesday_at(21, 0));
    assert!(ReminderPlanner::due_schedules(&schedules, &config, &too_early).is_empty());
}

#[test]
fn notify_due_sends_the_interpolated_bedtime() {
    let config = CycleConfig::default();
    let clock = FixedClock::at(wednesday_at(22, 50));
    let channel = RecordingChannel::default();

    let delivered =
        ReminderPlanner::notify_due(&[schedule()], "device-token", &config, &clock, &channel);

    assert_eq!(delivered, 1);
    let sent = channel.sent.borrow();
    let (token, notification) = &sent[0];
    assert_eq!(token, "device-token");
    assert_eq!(notification.data["type"], "bedtime_reminder");
    assert_eq!(notification.data["bedtime"], "23:15");
}

#[test]
fn delivery_failures_are_swallowed_not_raised() {
    let config = CycleConfig::default();
    let clock = FixedClock::at(wednesday_at(22, 50));

    let delivered =
        ReminderPlanner::notify_due(&[schedule()], "device-token", &config, &clock, &FailingChannel);
    assert_eq!(delivered, 0);
}
