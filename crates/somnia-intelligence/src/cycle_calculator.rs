// ABOUTME: Sleep-cycle arithmetic over wall-clock bedtimes and wake-up times
// ABOUTME: Cycle breakdown, cycle-aligned bedtime, and ranked ideal-time recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use serde::{Deserialize, Serialize};

use somnia_core::errors::{AppError, AppResult};
use somnia_core::models::ClockTime;

/// Waking after only one or two cycles is not a useful recommendation, so
/// ideal wake-up lists start here. Ideal bedtime lists intentionally do not
/// skip low counts: a late-night user still wants the one-cycle option.
const WAKEUP_START_CYCLES: u32 = 3;

/// Breakdown of one night of sleep into whole and partial cycles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SleepCalculation {
    /// Number of complete cycles between sleep onset and wake-up
    pub complete_cycles: u32,
    /// Fraction of the trailing incomplete cycle (0 inclusive to 1 exclusive)
    pub partial_cycle: f64,
    /// Minutes actually asleep, from onset to wake-up
    pub total_sleep_minutes: u32,
    /// Bedtime shifted forward so the same wake-up lands exactly on a cycle
    /// boundary
    pub adjusted_bedtime: ClockTime,
}

/// Deterministic sleep-cycle calculator.
///
/// Bedtime and wake-up are clock times on a single relative day; a wake-up
/// that reads earlier than sleep onset is interpreted as the next day.
pub struct SleepCycleCalculator;

impl SleepCycleCalculator {
    /// Compute the cycle breakdown for one night.
    ///
    /// Sleep onset is `bedtime + latency`; total sleep is the forward
    /// distance from onset to wake-up (wrapping past midnight), split into
    /// `floor(total / cycle_length)` whole cycles and a fractional
    /// remainder. The adjusted bedtime shifts the original bedtime forward
    /// by the non-cycle-aligned leftover minutes.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` when `cycle_length_minutes` is zero; range
    /// validation of settings-sourced values belongs to the boundary
    /// (`Settings::validate`).
    pub fn calculate(
        bedtime: ClockTime,
        wakeup_time: ClockTime,
        latency_minutes: u32,
        cycle_length_minutes: u32,
    ) -> AppResult<SleepCalculation> {
        Self::require_positive_cycle(cycle_length_minutes)?;

        let sleep_onset = bedtime.add_minutes(latency_minutes);
        let total_sleep_minutes = sleep_onset.minutes_until(wakeup_time);

        let complete_cycles = total_sleep_minutes / cycle_length_minutes;
        let leftover_minutes = total_sleep_minutes % cycle_length_minutes;
        let partial_cycle = f64::from(leftover_minutes) / f64::from(cycle_length_minutes);

        Ok(SleepCalculation {
            complete_cycles,
            partial_cycle,
            total_sleep_minutes,
            adjusted_bedtime: bedtime.add_minutes(leftover_minutes),
        })
    }

    /// Ranked bedtime options for a fixed wake-up time.
    ///
    /// Returns exactly `options` entries ordered from the highest cycle
    /// count down to one cycle: element 0 is the earliest bedtime (most
    /// sleep), the last element the latest (one cycle). Each entry walks
    /// back `cycles x cycle_length` from wake-up and then subtracts the
    /// latency.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` when `cycle_length_minutes` is zero.
    pub fn ideal_bedtimes(
        wakeup_time: ClockTime,
        latency_minutes: u32,
        cycle_length_minutes: u32,
        options: usize,
    ) -> AppResult<Vec<ClockTime>> {
        Self::require_positive_cycle(cycle_length_minutes)?;

        let options = u32::try_from(options).unwrap_or(u32::MAX);
        Ok((1..=options)
            .rev()
            .map(|cycles| {
                wakeup_time.sub_minutes(cycles * cycle_length_minutes + latency_minutes)
            })
            .collect())
    }

    /// Ranked wake-up options for a fixed bedtime.
    ///
    /// Returns exactly `options` entries for cycle counts
    /// `3 ..= options + 2`, each `onset + cycles x cycle_length`.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` when `cycle_length_minutes` is zero.
    pub fn ideal_wakeup_times(
        bedtime: ClockTime,
        latency_minutes: u32,
        cycle_length_minutes: u32,
        options: usize,
    ) -> AppResult<Vec<ClockTime>> {
        Self::require_positive_cycle(cycle_length_minutes)?;

        let sleep_onset = bedtime.add_minutes(latency_minutes);
        let options = u32::try_from(options).unwrap_or(u32::MAX);
        Ok((WAKEUP_START_CYCLES..WAKEUP_START_CYCLES + options)
            .map(|cycles| sleep_onset.add_minutes(cycles * cycle_length_minutes))
            .collect())
    }

    fn require_positive_cycle(cycle_length_minutes: u32) -> AppResult<()> {
        if cycle_length_minutes == 0 {
            return Err(AppError::value_out_of_range(
                "cycle length must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
