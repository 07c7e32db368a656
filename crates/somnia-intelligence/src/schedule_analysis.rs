// ABOUTME: Schedule statistics over sleep history: variance, sub-means, consistency score
// ABOUTME: Night-anchored time mapping so cross-midnight bedtimes average correctly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![allow(clippy::cast_precision_loss)] // Safe: minute values are < 1800, sample sizes < 100

use serde::{Deserialize, Serialize};

use somnia_core::models::{ClockTime, SleepEntry, MINUTES_PER_DAY};

use crate::config::ConsistencyScoringConfig;

/// Times before this hour belong to the night that started the previous
/// evening.
const NIGHT_CUTOFF_HOUR: u8 = 6;

/// Minutes from midnight, anchored to the night the time belongs to.
///
/// A bedtime or wake-up between 00:00 and 05:59 is shifted forward by one
/// day so that clustering and averaging of times that straddle midnight do
/// not suffer wraparound artifacts: 23:30 and 00:30 average to about 00:00,
/// not about 12:00. [`ClockTime::from_minute_of_day`] is the exact inverse,
/// since normalization removes the added day.
#[must_use]
pub fn night_anchored_minutes(time: ClockTime) -> u32 {
    let mut minutes = time.minute_of_day();
    if time.hour() < NIGHT_CUTOFF_HOUR {
        minutes += MINUTES_PER_DAY;
    }
    minutes
}

/// Derived statistics over a window of sleep history.
///
/// Ephemeral and recomputed on demand; never persisted. Minute fields are in
/// the night-anchored domain (early-morning averages can exceed 1440) and
/// rounded to whole minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Population standard deviation of bedtime (minutes)
    pub bedtime_variance_minutes: u32,
    /// Population standard deviation of wake-up time (minutes)
    pub wakeup_variance_minutes: u32,
    /// Mean bedtime (night-anchored minutes)
    pub avg_bedtime_minutes: u32,
    /// Mean wake-up time (night-anchored minutes)
    pub avg_wakeup_minutes: u32,
    /// Mean weekday bedtime (falls back to the overall mean without weekday data)
    pub weekday_avg_bedtime: u32,
    /// Mean weekend bedtime (falls back to the overall mean without weekend data)
    pub weekend_avg_bedtime: u32,
    /// Mean weekday wake-up (falls back to the overall mean without weekday data)
    pub weekday_avg_wakeup: u32,
    /// Mean weekend wake-up (falls back to the overall mean without weekend data)
    pub weekend_avg_wakeup: u32,
    /// Weighted consistency score, always 0-100
    pub consistency_score: u8,
    /// Number of entries the statistics were computed over
    pub data_points: usize,
}

impl ScheduleStats {
    /// Mean of the bedtime and wake-up variances, the irregularity signal
    /// used by the insight rules
    #[must_use]
    pub fn average_variance_minutes(&self) -> f64 {
        f64::from(self.bedtime_variance_minutes + self.wakeup_variance_minutes) / 2.0
    }

    /// The mean bedtime as a wall-clock time
    #[must_use]
    pub fn suggested_bedtime(&self) -> ClockTime {
        ClockTime::from_minute_of_day(self.avg_bedtime_minutes)
    }
}

/// Statistics engine over sleep history snapshots
pub struct ScheduleAnalyzer;

impl ScheduleAnalyzer {
    /// Compute schedule statistics for a history window.
    ///
    /// Returns `None` below the minimum sample threshold — insufficient data
    /// is a normal, expected state, not a failure.
    #[must_use]
    pub fn analyze(
        entries: &[SleepEntry],
        config: &ConsistencyScoringConfig,
    ) -> Option<ScheduleStats> {
        if entries.len() < config.min_entries {
            return None;
        }

        let bedtimes: Vec<f64> = entries
            .iter()
            .map(|e| f64::from(night_anchored_minutes(e.bedtime)))
            .collect();
        let wakeups: Vec<f64> = entries
            .iter()
            .map(|e| f64::from(night_anchored_minutes(e.wakeup_time)))
            .collect();

        let bedtime_variance = population_std_dev(&bedtimes);
        let wakeup_variance = population_std_dev(&wakeups);
        let avg_bedtime = mean(&bedtimes);
        let avg_wakeup = mean(&wakeups);

        let weekday_bedtimes = subset_minutes(entries, |e| !e.is_weekend(), |e| e.bedtime);
        let weekend_bedtimes = subset_minutes(entries, SleepEntry::is_weekend, |e| e.bedtime);
        let weekday_wakeups = subset_minutes(entries, |e| !e.is_weekend(), |e| e.wakeup_time);
        let weekend_wakeups = subset_minutes(entries, SleepEntry::is_weekend, |e| e.wakeup_time);

        // An empty subset falls back to the overall mean, which avoids NaN
        // and avoids signaling a weekend shift when there is no weekend data.
        let weekday_avg_bedtime = mean_or(&weekday_bedtimes, avg_bedtime);
        let weekend_avg_bedtime = mean_or(&weekend_bedtimes, avg_bedtime);
        let weekday_avg_wakeup = mean_or(&weekday_wakeups, avg_wakeup);
        let weekend_avg_wakeup = mean_or(&weekend_wakeups, avg_wakeup);

        let weekend_bedtime_gap = (weekend_avg_bedtime - weekday_avg_bedtime).abs();
        let consistency_score = consistency_score(
            bedtime_variance,
            wakeup_variance,
            weekend_bedtime_gap,
            config,
        );

        Some(ScheduleStats {
            bedtime_variance_minutes: bedtime_variance.round() as u32,
            wakeup_variance_minutes: wakeup_variance.round() as u32,
            avg_bedtime_minutes: avg_bedtime.round() as u32,
            avg_wakeup_minutes: avg_wakeup.round() as u32,
            weekday_avg_bedtime: weekday_avg_bedtime.round() as u32,
            weekend_avg_bedtime: weekend_avg_bedtime.round() as u32,
            weekday_avg_wakeup: weekday_avg_wakeup.round() as u32,
            weekend_avg_wakeup: weekend_avg_wakeup.round() as u32,
            consistency_score,
            data_points: entries.len(),
        })
    }
}

/// Weighted 0-100 consistency score.
///
/// Each variance converts to a [0,1] goodness via
/// `max(0, 1 - variance / very_poor)`; the weekend gap uses a ceiling of
/// twice the poor threshold. The weighted sum scales to 0-100.
fn consistency_score(
    bedtime_variance: f64,
    wakeup_variance: f64,
    weekend_gap: f64,
    config: &ConsistencyScoringConfig,
) -> u8 {
    let bedtime_score = (1.0 - bedtime_variance / config.very_poor_variance_minutes).max(0.0);
    let wakeup_score = (1.0 - wakeup_variance / config.very_poor_variance_minutes).max(0.0);
    let weekend_score = (1.0 - weekend_gap / (config.poor_variance_minutes * 2.0)).max(0.0);

    let weighted = bedtime_score.mul_add(
        config.bedtime_weight,
        wakeup_score.mul_add(config.wakeup_weight, weekend_score * config.weekend_weight),
    );

    (weighted * 100.0).round().clamp(0.0, 100.0) as u8
}

fn subset_minutes(
    entries: &[SleepEntry],
    select: impl Fn(&SleepEntry) -> bool,
    time: impl Fn(&SleepEntry) -> ClockTime,
) -> Vec<f64> {
    entries
        .iter()
        .filter(|e| select(e))
        .map(|e| f64::from(night_anchored_minutes(time(e))))
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn mean_or(values: &[f64], fallback: f64) -> f64 {
    if values.is_empty() {
        fallback
    } else {
        mean(values)
    }
}

/// Population standard deviation (no Bessel correction); 0 below two samples
fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let avg_squared_diff =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    avg_squared_diff.sqrt()
}
