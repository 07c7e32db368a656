// ABOUTME: Sleep history models for schedule analysis
// ABOUTME: SleepEntry and NewSleepEntry definitions with creation-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::ClockTime;

/// One logged sleep session.
///
/// Entries are immutable once appended to history; they are only removable
/// via a bulk clear of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepEntry {
    /// Unique identifier, assigned by the history store at append time
    pub id: Uuid,
    /// Calendar date the entry represents, used for weekday/weekend
    /// classification and chronological ordering
    pub date: NaiveDate,
    /// Wall-clock bedtime
    pub bedtime: ClockTime,
    /// Wall-clock wake-up time
    pub wakeup_time: ClockTime,
    /// Number of full sleep cycles achieved
    pub complete_cycles: u32,
    /// Fraction of one additional cycle achieved (0-1)
    pub partial_cycle: f64,
    /// Best-aligned bedtime recommendation captured at creation time
    pub ideal_bedtime: ClockTime,
    /// Best-aligned wake-up recommendation captured at creation time
    pub ideal_wakeup_time: ClockTime,
}

impl SleepEntry {
    /// Whether this entry falls on a weekend (Saturday or Sunday)
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// A sleep session awaiting an identifier, as handed to the history store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSleepEntry {
    /// Calendar date the entry represents
    pub date: NaiveDate,
    /// Wall-clock bedtime
    pub bedtime: ClockTime,
    /// Wall-clock wake-up time
    pub wakeup_time: ClockTime,
    /// Number of full sleep cycles achieved
    pub complete_cycles: u32,
    /// Fraction of one additional cycle achieved (0-1)
    pub partial_cycle: f64,
    /// Best-aligned bedtime recommendation captured at creation time
    pub ideal_bedtime: ClockTime,
    /// Best-aligned wake-up recommendation captured at creation time
    pub ideal_wakeup_time: ClockTime,
}

impl NewSleepEntry {
    /// Validate the creation-time invariants.
    ///
    /// Time fields are already range-valid by construction (`ClockTime`);
    /// the remaining check is the partial-cycle fraction.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` when `partial_cycle` is outside `[0, 1]`
    /// or not a finite number.
    pub fn validate(&self) -> AppResult<()> {
        if !self.partial_cycle.is_finite() || !(0.0..=1.0).contains(&self.partial_cycle) {
            return Err(AppError::value_out_of_range(format!(
                "partial cycle must be between 0 and 1, got {}",
                self.partial_cycle
            )));
        }
        Ok(())
    }

    /// Promote to a stored entry with the identifier the store assigned
    #[must_use]
    pub fn into_entry(self, id: Uuid) -> SleepEntry {
        SleepEntry {
            id,
            date: self.date,
            bedtime: self.bedtime,
            wakeup_time: self.wakeup_time,
            complete_cycles: self.complete_cycles,
            partial_cycle: self.partial_cycle,
            ideal_bedtime: self.ideal_bedtime,
            ideal_wakeup_time: self.ideal_wakeup_time,
        }
    }
}
