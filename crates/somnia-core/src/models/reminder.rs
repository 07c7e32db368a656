// ABOUTME: Bedtime reminder schedule model with delivery-boundary validation
// ABOUTME: ReminderSchedule definition mirroring the reminder delivery contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::ClockTime;

/// A recurring bedtime reminder: on the selected weekdays, notify the user
/// during the wind-down window before the cycle-aligned bedtime for the
/// configured wake-up time.
///
/// The cycle-length bounds here (60-150) are deliberately wider than the
/// settings bounds (60-120): the delivery boundary accepts schedules written
/// by older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderSchedule {
    /// Target wake-up time the bedtime is derived from
    pub wake_up_time: ClockTime,
    /// Days of week on which the reminder fires
    pub days_of_week: Vec<Weekday>,
    /// Lead time before bedtime during which the reminder should fire
    pub wind_down_minutes: u32,
    /// Minutes per sleep cycle used for the bedtime derivation
    pub cycle_length_minutes: u32,
    /// Minutes to fall asleep used for the bedtime derivation
    pub sleep_latency_minutes: u32,
    /// Whether this schedule is active
    pub enabled: bool,
}

impl ReminderSchedule {
    /// Validate the schedule fields.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty or oversized day selection and
    /// `ValueOutOfRange` for numeric fields outside their bounds.
    pub fn validate(&self) -> AppResult<()> {
        if self.days_of_week.is_empty() || self.days_of_week.len() > 7 {
            return Err(AppError::invalid_input(format!(
                "days of week must select 1-7 days, got {}",
                self.days_of_week.len()
            )));
        }
        if !(60..=150).contains(&self.cycle_length_minutes) {
            return Err(AppError::value_out_of_range(format!(
                "cycle length must be 60-150 minutes, got {}",
                self.cycle_length_minutes
            )));
        }
        if self.sleep_latency_minutes > 60 {
            return Err(AppError::value_out_of_range(format!(
                "sleep latency must be 0-60 minutes, got {}",
                self.sleep_latency_minutes
            )));
        }
        if self.wind_down_minutes > 120 {
            return Err(AppError::value_out_of_range(format!(
                "wind down must be 0-120 minutes, got {}",
                self.wind_down_minutes
            )));
        }
        Ok(())
    }
}
