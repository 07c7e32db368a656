// ABOUTME: Bedtime reminder planning: target bedtimes, wind-down windows, due-schedule scan
// ABOUTME: Pure decisions over the injected clock; delivery stays behind the channel seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use std::collections::HashMap;

use tracing::{debug, warn};

use somnia_core::clock::Clock;
use somnia_core::models::{ClockTime, ReminderSchedule};
use somnia_core::notifications::{NotificationChannel, PushNotification};

use crate::config::CycleConfig;

/// Reminder planning engine.
///
/// Decides *when* a wind-down reminder is due and *what* to send; actual
/// wall-clock scheduling and push transport are collaborator concerns.
pub struct ReminderPlanner;

impl ReminderPlanner {
    /// The bedtime that yields `cycles` whole cycles of sleep before the
    /// given wake-up time, accounting for sleep latency
    #[must_use]
    pub fn target_bedtime(
        wake_up_time: ClockTime,
        cycle_length_minutes: u32,
        latency_minutes: u32,
        cycles: u32,
    ) -> ClockTime {
        wake_up_time.sub_minutes(cycles * cycle_length_minutes + latency_minutes)
    }

    /// Whether `now` falls inside the wind-down window: strictly before the
    /// target bedtime, by at most `wind_down_minutes`
    #[must_use]
    pub fn should_notify(
        target_bedtime: ClockTime,
        wind_down_minutes: u32,
        now: ClockTime,
    ) -> bool {
        let minutes_until = now.minutes_until(target_bedtime);
        minutes_until > 0 && minutes_until <= wind_down_minutes
    }

    /// The schedules due right now: enabled, selected for the clock's
    /// weekday, and inside their wind-down window
    #[must_use]
    pub fn due_schedules<'a>(
        schedules: &'a [ReminderSchedule],
        config: &CycleConfig,
        clock: &impl Clock,
    ) -> Vec<&'a ReminderSchedule> {
        let weekday = clock.weekday();
        let now = clock.local_time();

        schedules
            .iter()
            .filter(|schedule| {
                schedule.enabled
                    && schedule.days_of_week.contains(&weekday)
                    && Self::should_notify(
                        Self::target_bedtime(
                            schedule.wake_up_time,
                            schedule.cycle_length_minutes,
                            schedule.sleep_latency_minutes,
                            config.reminder_cycles,
                        ),
                        schedule.wind_down_minutes,
                        now,
                    )
            })
            .collect()
    }

    /// Deliver a wind-down notification for every due schedule.
    ///
    /// Returns the number of successful deliveries. Channel failures are
    /// logged and skipped — a broken transport must never block the pure
    /// planning path.
    pub fn notify_due(
        schedules: &[ReminderSchedule],
        token: &str,
        config: &CycleConfig,
        clock: &impl Clock,
        channel: &impl NotificationChannel,
    ) -> usize {
        let mut delivered = 0;
        for schedule in Self::due_schedules(schedules, config, clock) {
            let bedtime = Self::target_bedtime(
                schedule.wake_up_time,
                schedule.cycle_length_minutes,
                schedule.sleep_latency_minutes,
                config.reminder_cycles,
            );

            let notification = PushNotification {
                title: "coach.reminders.wind_down.title".to_owned(),
                body: "coach.reminders.wind_down.body".to_owned(),
                data: HashMap::from([
                    ("type".to_owned(), "bedtime_reminder".to_owned()),
                    ("bedtime".to_owned(), bedtime.to_string()),
                ]),
            };

            match channel.send(token, &notification) {
                Ok(()) => {
                    delivered += 1;
                    debug!(bedtime = %bedtime, "bedtime reminder delivered");
                }
                Err(err) => warn!(error = %err, "bedtime reminder delivery failed"),
            }
        }
        delivered
    }
}
