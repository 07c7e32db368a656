// ABOUTME: Sleep-cycle analytics, schedule statistics, and coaching-insight engine
// ABOUTME: Pure, synchronous analysis over snapshots of sleep history and settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![deny(unsafe_code)]

//! # Somnia Intelligence
//!
//! The analytical engine of the Somnia platform: deterministic sleep-cycle
//! arithmetic plus statistical pattern detection and coaching-insight
//! generation over a rolling window of sleep history.
//!
//! Every function here is a pure computation over a snapshot of history and
//! settings. Nothing holds state between calls, nothing performs I/O, and
//! "now" always comes from an injected [`somnia_core::Clock`], so results
//! are reproducible and testable. Callers re-run the analysis whenever the
//! underlying history snapshot changes and discard the previous result.
//!
//! ## Modules
//!
//! - **config**: Tunable calibration constants with product defaults
//! - **cycle_calculator**: Cycle breakdown and ideal bedtime/wake-up lists
//! - **schedule_analysis**: Variance statistics and the consistency score
//! - **pattern_detection**: Weekend-shift, trend, streak, and irregularity detectors
//! - **insights**: Prioritized, deduplicated coaching insights
//! - **reminders**: Wind-down reminder planning over the injected clock
//! - **tracker**: One-call record/analyze facade over the collaborator seams

/// Tunable calibration constants for scoring and detection
pub mod config;

/// Sleep-cycle breakdown and ideal-time recommendations
pub mod cycle_calculator;

/// Schedule statistics: variance, sub-means, and the consistency score
pub mod schedule_analysis;

/// Behavioral pattern detectors over schedule statistics
pub mod pattern_detection;

/// Coaching-insight generation and ranking
pub mod insights;

/// Bedtime reminder planning
pub mod reminders;

/// Record-and-analyze facade tying the engine to the collaborator seams
pub mod tracker;

pub use config::{
    ConsistencyScoringConfig, CycleConfig, IntelligenceConfig, PatternDetectionConfig,
};
pub use cycle_calculator::{SleepCalculation, SleepCycleCalculator};
pub use insights::{CoachInsight, InsightCategory, InsightGenerator, InsightPriority};
pub use pattern_detection::{PatternDetector, PatternResult, ShiftDirection, SleepPattern};
pub use reminders::ReminderPlanner;
pub use schedule_analysis::{ScheduleAnalyzer, ScheduleStats};
pub use tracker::{SleepResults, SleepTracker};
