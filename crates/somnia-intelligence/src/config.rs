// ABOUTME: Calibration constants for consistency scoring, pattern detection, and cycle defaults
// ABOUTME: Empirically tuned product values exposed as configuration with Default impls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

//! Intelligence Configuration
//!
//! Every empirically tuned constant in the engine lives here rather than as
//! a literal in the algorithms: the variance ladder behind the consistency
//! score, its component weights, the pattern-detection thresholds, and the
//! cycle-arithmetic defaults. The `Default` impls carry the calibrated
//! product values; callers that want different tuning construct their own.

use serde::{Deserialize, Serialize};

/// Intelligence engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Consistency-score calibration
    pub consistency: ConsistencyScoringConfig,
    /// Pattern-detection thresholds
    pub patterns: PatternDetectionConfig,
    /// Sleep-cycle arithmetic defaults
    pub cycles: CycleConfig,
}

/// Calibration for the 0-100 schedule consistency score.
///
/// The variance ladder expresses how many minutes of day-to-day standard
/// deviation correspond to each quality tier. Scores are computed as
/// `max(0, 1 - variance / very_poor)` per component, weighted, and scaled
/// to 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyScoringConfig {
    /// Minimum history entries before any statistics are computed
    pub min_entries: usize,
    /// Variance at or below this is excellent (minutes)
    pub excellent_variance_minutes: f64,
    /// Variance at or below this is good (minutes)
    pub good_variance_minutes: f64,
    /// Variance above this is clearly irregular (minutes)
    pub moderate_variance_minutes: f64,
    /// Variance above this is poor (minutes)
    pub poor_variance_minutes: f64,
    /// Variance at which a component score bottoms out at zero (minutes)
    pub very_poor_variance_minutes: f64,
    /// Weight of the bedtime-variance component
    pub bedtime_weight: f64,
    /// Weight of the wake-time-variance component
    pub wakeup_weight: f64,
    /// Weight of the weekday/weekend-gap component
    pub weekend_weight: f64,
}

impl Default for ConsistencyScoringConfig {
    fn default() -> Self {
        Self {
            min_entries: 3,
            excellent_variance_minutes: 15.0,
            good_variance_minutes: 30.0,
            moderate_variance_minutes: 60.0,
            poor_variance_minutes: 90.0,
            very_poor_variance_minutes: 120.0,
            // Bedtime 40%, wake-up 40%, weekend gap 20%
            bedtime_weight: 0.4,
            wakeup_weight: 0.4,
            weekend_weight: 0.2,
        }
    }
}

/// Thresholds for the behavioral pattern detectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDetectionConfig {
    /// Weekday/weekend average gap that signals a weekend shift (minutes)
    pub weekend_shift_threshold_minutes: f64,
    /// Gap at which weekend-shift confidence saturates at 1.0 (minutes)
    pub weekend_confidence_divisor_minutes: f64,
    /// Bedtime gap above which the weekend insight escalates to high priority (minutes)
    pub weekend_high_priority_minutes: f64,
    /// Minimum entries before trend detection runs
    pub trend_min_entries: usize,
    /// Fraction of newest entries forming the "recent" slice
    pub trend_recent_fraction: f64,
    /// Minimum entries required in each trend slice
    pub trend_min_slice_entries: usize,
    /// Consistency-score change that counts as a trend
    pub trend_score_threshold: i32,
    /// Score change at which trend confidence saturates at 1.0
    pub trend_confidence_divisor: f64,
    /// Minimum entries before a streak can be reported
    pub streak_min_entries: usize,
    /// Consistency score required for a streak
    pub streak_score_threshold: u8,
}

impl Default for PatternDetectionConfig {
    fn default() -> Self {
        Self {
            weekend_shift_threshold_minutes: 45.0,
            weekend_confidence_divisor_minutes: 90.0,
            weekend_high_priority_minutes: 90.0,
            trend_min_entries: 7,
            trend_recent_fraction: 0.3,
            trend_min_slice_entries: 3,
            trend_score_threshold: 10,
            trend_confidence_divisor: 30.0,
            streak_min_entries: 5,
            streak_score_threshold: 80,
        }
    }
}

/// Defaults for sleep-cycle arithmetic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Standard sleep cycle length (minutes)
    pub default_cycle_length_minutes: u32,
    /// Default sleep latency (minutes)
    pub default_latency_minutes: u32,
    /// Number of ideal-time options presented to the user
    pub ideal_options: usize,
    /// Cycle count a bedtime reminder plans for
    pub reminder_cycles: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            default_cycle_length_minutes: 90,
            default_latency_minutes: 15,
            ideal_options: 4,
            reminder_cycles: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let config = ConsistencyScoringConfig::default();
        let sum = config.bedtime_weight + config.wakeup_weight + config.weekend_weight;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn variance_ladder_is_monotonic() {
        let c = ConsistencyScoringConfig::default();
        assert!(c.excellent_variance_minutes < c.good_variance_minutes);
        assert!(c.good_variance_minutes < c.moderate_variance_minutes);
        assert!(c.moderate_variance_minutes < c.poor_variance_minutes);
        assert!(c.poor_variance_minutes < c.very_poor_variance_minutes);
    }
}
