// ABOUTME: Behavioral pattern detection over sleep-schedule statistics
// ABOUTME: Weekend-shift, trend, consistency-streak, and irregularity detectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use serde::{Deserialize, Serialize};

use somnia_core::models::SleepEntry;

use crate::config::{ConsistencyScoringConfig, IntelligenceConfig, PatternDetectionConfig};
use crate::schedule_analysis::{ScheduleAnalyzer, ScheduleStats};

/// Direction of a weekend schedule shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    /// Weekend bedtimes average later than weekday bedtimes
    Later,
    /// Weekend bedtimes average earlier than weekday bedtimes
    Earlier,
}

/// A detected behavioral pattern with its supporting detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum SleepPattern {
    /// Weekday and weekend schedules diverge
    WeekendShift {
        /// Gap between weekend and weekday mean bedtimes (minutes)
        bedtime_diff_minutes: u32,
        /// Gap between weekend and weekday mean wake-ups (minutes)
        wakeup_diff_minutes: u32,
        /// Which way the weekend shifts
        direction: ShiftDirection,
    },
    /// Consistency improved between the earlier and recent windows
    Improving {
        /// Consistency score of the recent window
        recent_score: u8,
        /// Consistency score of the earlier window
        previous_score: u8,
        /// Score gain
        change: u8,
    },
    /// Consistency declined between the earlier and recent windows
    Declining {
        /// Consistency score of the recent window
        recent_score: u8,
        /// Consistency score of the earlier window
        previous_score: u8,
        /// Score loss
        change: u8,
    },
    /// Sustained run of highly consistent nights
    Consistent {
        /// Overall consistency score
        score: u8,
        /// Number of nights in the window
        days: usize,
    },
    /// High day-to-day variance in both bedtime and wake-up
    Irregular {
        /// Bedtime standard deviation (minutes)
        bedtime_variance: u32,
        /// Wake-up standard deviation (minutes)
        wakeup_variance: u32,
        /// Mean of the two variances (minutes)
        avg_variance: u32,
    },
}

/// A pattern-detection outcome: the pattern plus a 0-1 confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    /// The detected pattern and its detail fields
    #[serde(flatten)]
    pub pattern: SleepPattern,
    /// Detection confidence in `[0, 1]`
    pub confidence: f64,
}

/// Pattern detection engine.
///
/// Each detector is independent and returns `None` when its pattern is
/// absent or its minimum sample is not met.
pub struct PatternDetector;

impl PatternDetector {
    /// Detect diverging weekday and weekend schedules.
    ///
    /// Present when either the bedtime or the wake-up gap between weekend
    /// and weekday averages reaches the shift threshold.
    #[must_use]
    pub fn detect_weekend_shift(
        stats: &ScheduleStats,
        config: &PatternDetectionConfig,
    ) -> Option<PatternResult> {
        let bedtime_gap = stats.weekend_avg_bedtime.abs_diff(stats.weekday_avg_bedtime);
        let wakeup_gap = stats.weekend_avg_wakeup.abs_diff(stats.weekday_avg_wakeup);
        let widest_gap = f64::from(bedtime_gap.max(wakeup_gap));

        if f64::from(bedtime_gap) < config.weekend_shift_threshold_minutes
            && f64::from(wakeup_gap) < config.weekend_shift_threshold_minutes
        {
            return None;
        }

        let direction = if stats.weekend_avg_bedtime > stats.weekday_avg_bedtime {
            ShiftDirection::Later
        } else {
            ShiftDirection::Earlier
        };

        Some(PatternResult {
            pattern: SleepPattern::WeekendShift {
                bedtime_diff_minutes: bedtime_gap,
                wakeup_diff_minutes: wakeup_gap,
                direction,
            },
            confidence: (widest_gap / config.weekend_confidence_divisor_minutes).min(1.0),
        })
    }

    /// Detect an improving or declining consistency trend.
    ///
    /// Compares the newest ~30% of entries (at least three) against the
    /// remainder; both windows are scored independently and the trend is the
    /// score difference.
    #[must_use]
    pub fn detect_trend(
        entries: &[SleepEntry],
        config: &IntelligenceConfig,
    ) -> Option<PatternResult> {
        let patterns = &config.patterns;
        if entries.len() < patterns.trend_min_entries {
            return None;
        }

        let mut sorted: Vec<SleepEntry> = entries.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let split = (sorted.len() as f64 * patterns.trend_recent_fraction).ceil() as usize;
        let recent = &sorted[..split.max(patterns.trend_min_slice_entries).min(sorted.len())];
        let earlier = &sorted[split.min(sorted.len())..];
        if earlier.len() < patterns.trend_min_slice_entries {
            return None;
        }

        let recent_stats = ScheduleAnalyzer::analyze(recent, &config.consistency)?;
        let earlier_stats = ScheduleAnalyzer::analyze(earlier, &config.consistency)?;

        let score_diff =
            i32::from(recent_stats.consistency_score) - i32::from(earlier_stats.consistency_score);
        if score_diff.abs() < patterns.trend_score_threshold {
            return None;
        }

        let change = score_diff.unsigned_abs() as u8;
        let pattern = if score_diff > 0 {
            SleepPattern::Improving {
                recent_score: recent_stats.consistency_score,
                previous_score: earlier_stats.consistency_score,
                change,
            }
        } else {
            SleepPattern::Declining {
                recent_score: recent_stats.consistency_score,
                previous_score: earlier_stats.consistency_score,
                change,
            }
        };

        Some(PatternResult {
            pattern,
            confidence: (f64::from(score_diff.abs()) / patterns.trend_confidence_divisor).min(1.0),
        })
    }

    /// Detect a sustained streak of highly consistent nights
    #[must_use]
    pub fn detect_consistent_streak(
        entries: &[SleepEntry],
        config: &IntelligenceConfig,
    ) -> Option<PatternResult> {
        if entries.len() < config.patterns.streak_min_entries {
            return None;
        }

        let stats = ScheduleAnalyzer::analyze(entries, &config.consistency)?;
        if stats.consistency_score < config.patterns.streak_score_threshold {
            return None;
        }

        Some(PatternResult {
            pattern: SleepPattern::Consistent {
                score: stats.consistency_score,
                days: stats.data_points,
            },
            confidence: f64::from(stats.consistency_score) / 100.0,
        })
    }

    /// Detect an irregular schedule from the variance averages.
    ///
    /// Not consumed by the insight rules (the variance insight covers that
    /// ground); exposed for chart and dashboard consumers.
    #[must_use]
    pub fn detect_irregular(
        stats: &ScheduleStats,
        config: &ConsistencyScoringConfig,
    ) -> Option<PatternResult> {
        let avg_variance = stats.average_variance_minutes();
        if avg_variance < config.moderate_variance_minutes {
            return None;
        }

        Some(PatternResult {
            pattern: SleepPattern::Irregular {
                bedtime_variance: stats.bedtime_variance_minutes,
                wakeup_variance: stats.wakeup_variance_minutes,
                avg_variance: avg_variance.round() as u32,
            },
            confidence: (avg_variance / config.very_poor_variance_minutes).min(1.0),
        })
    }
}
