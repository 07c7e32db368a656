// ABOUTME: Coaching-insight generation from schedule statistics and detected patterns
// ABOUTME: Fixed rule order, variance/streak mutual exclusion, stable priority ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

//! Coaching insight generation.
//!
//! Insights carry i18n template references (`coach.insights.*`) plus a
//! structured interpolation payload; rendering is the UI's concern. Each
//! analysis pass produces a fresh list — insights are never persisted, and
//! dismissal state lives outside the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use somnia_core::clock::{Clock, SystemClock};
use somnia_core::models::{ClockTime, SleepEntry};

use crate::config::IntelligenceConfig;
use crate::pattern_detection::{PatternDetector, PatternResult, ShiftDirection, SleepPattern};
use crate::schedule_analysis::{ScheduleAnalyzer, ScheduleStats};

/// Categories of insights the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Bedtime/wake-up variance is high
    ScheduleVariance,
    /// Weekday and weekend schedules diverge
    WeekendPattern,
    /// Consistency is trending up
    ImprovingTrend,
    /// Consistency is trending down
    DecliningTrend,
    /// Sustained run of consistent nights
    OptimalStreak,
    /// Not enough history to analyze yet
    InsufficientData,
}

/// Priority tier of an insight; lower rank sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    /// Needs attention now
    High,
    /// Worth acting on
    Medium,
    /// Minor observation
    Low,
    /// Informational only
    Info,
}

impl InsightPriority {
    /// Sort rank: high(0) < medium(1) < low(2) < info(3)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
            Self::Info => 3,
        }
    }
}

/// A prioritized, human-facing observation derived from sleep history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachInsight {
    /// Freshly generated identifier
    pub id: Uuid,
    /// Insight category
    pub category: InsightCategory,
    /// Priority tier
    pub priority: InsightPriority,
    /// i18n template reference for the title
    pub title: String,
    /// i18n template reference for the message body
    pub message: String,
    /// Structured payload interpolated into the message template
    pub data: Value,
    /// Whether the insight suggests a concrete user action
    pub actionable: bool,
    /// Whether the UI may dismiss the insight; the insufficient-data insight
    /// represents a persistent app state and is never dismissible
    pub dismissible: bool,
    /// Creation timestamp from the injected clock
    pub created_at: DateTime<Utc>,
}

/// Insight generator: orchestrates statistics and pattern detection into a
/// prioritized, deduplicated insight list.
///
/// Stateless between calls — each invocation is a pure function of the
/// history snapshot, the configuration, and the injected clock.
pub struct InsightGenerator<C = SystemClock> {
    config: IntelligenceConfig,
    clock: C,
}

impl InsightGenerator<SystemClock> {
    /// Create a generator with the default configuration and system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::default())
    }

    /// Create a generator with a custom configuration and the system clock
    #[must_use]
    pub const fn with_config(config: IntelligenceConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for InsightGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InsightGenerator<C> {
    /// Create a generator with an injected clock, for deterministic tests
    pub const fn with_clock(config: IntelligenceConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Generate all applicable insights, ordered by priority.
    ///
    /// Rules evaluate in a fixed order and all applicable rules fire, with
    /// two exceptions: below the minimum sample only the insufficient-data
    /// insight is emitted, and a streak insight is suppressed whenever a
    /// variance warning fired (never praise and warn in the same breath).
    /// The final sort is stable, so insertion order breaks priority ties.
    #[must_use]
    pub fn generate(&self, entries: &[SleepEntry]) -> Vec<CoachInsight> {
        let mut insights = Vec::new();

        if entries.len() < self.config.consistency.min_entries {
            insights.push(self.insufficient_data_insight(entries.len()));
            return insights;
        }

        let Some(stats) = ScheduleAnalyzer::analyze(entries, &self.config.consistency) else {
            return insights;
        };

        let variance = self.variance_insight(&stats);
        let variance_fired = variance.is_some();
        insights.extend(variance);

        if let Some(shift) = PatternDetector::detect_weekend_shift(&stats, &self.config.patterns) {
            insights.extend(self.weekend_insight(&shift, &stats));
        }

        if let Some(trend) = PatternDetector::detect_trend(entries, &self.config) {
            insights.extend(self.trend_insight(&trend));
        }

        if !variance_fired {
            if let Some(streak) =
                PatternDetector::detect_consistent_streak(entries, &self.config)
            {
                insights.extend(self.streak_insight(&streak));
            }
        }

        insights.sort_by_key(|insight| insight.priority.rank());
        debug!(
            insight_count = insights.len(),
            entry_count = entries.len(),
            "generated coaching insights"
        );
        insights
    }

    /// The single most important insight to display.
    ///
    /// Falls back to the insufficient-data insight when no rule fired.
    #[must_use]
    pub fn primary(&self, entries: &[SleepEntry]) -> CoachInsight {
        self.generate(entries)
            .into_iter()
            .next()
            .unwrap_or_else(|| self.insufficient_data_insight(entries.len()))
    }

    fn variance_insight(&self, stats: &ScheduleStats) -> Option<CoachInsight> {
        let avg_variance = stats.average_variance_minutes();
        if avg_variance <= self.config.consistency.good_variance_minutes {
            return None;
        }

        let severe = avg_variance > self.config.consistency.poor_variance_minutes;
        Some(self.insight(
            InsightCategory::ScheduleVariance,
            if severe {
                InsightPriority::High
            } else {
                InsightPriority::Medium
            },
            "coach.insights.variance.title",
            if severe {
                "coach.insights.variance.message_high"
            } else {
                "coach.insights.variance.message_moderate"
            },
            json!({
                "bedtime_variance": stats.bedtime_variance_minutes,
                "wakeup_variance": stats.wakeup_variance_minutes,
                "suggested_bedtime": stats.suggested_bedtime().to_string(),
            }),
            true,
            true,
        ))
    }

    fn weekend_insight(&self, shift: &PatternResult, stats: &ScheduleStats) -> Option<CoachInsight> {
        let SleepPattern::WeekendShift {
            bedtime_diff_minutes,
            direction,
            ..
        } = shift.pattern
        else {
            return None;
        };

        let severe =
            f64::from(bedtime_diff_minutes) > self.config.patterns.weekend_high_priority_minutes;
        Some(self.insight(
            InsightCategory::WeekendPattern,
            if severe {
                InsightPriority::High
            } else {
                InsightPriority::Medium
            },
            "coach.insights.weekend.title",
            match direction {
                ShiftDirection::Later => "coach.insights.weekend.message_later",
                ShiftDirection::Earlier => "coach.insights.weekend.message_earlier",
            },
            json!({
                "time_difference": bedtime_diff_minutes,
                "weekday_bedtime": ClockTime::from_minute_of_day(stats.weekday_avg_bedtime).to_string(),
                "weekend_bedtime": ClockTime::from_minute_of_day(stats.weekend_avg_bedtime).to_string(),
            }),
            true,
            true,
        ))
    }

    fn trend_insight(&self, trend: &PatternResult) -> Option<CoachInsight> {
        match trend.pattern {
            SleepPattern::Improving {
                recent_score,
                previous_score,
                change,
            } => Some(self.insight(
                InsightCategory::ImprovingTrend,
                InsightPriority::Info,
                "coach.insights.trend.improving_title",
                "coach.insights.trend.improving_message",
                json!({
                    "current_score": recent_score,
                    "previous_score": previous_score,
                    "change": change,
                }),
                false,
                true,
            )),
            SleepPattern::Declining {
                recent_score,
                previous_score,
                change,
            } => Some(self.insight(
                InsightCategory::DecliningTrend,
                InsightPriority::Medium,
                "coach.insights.trend.declining_title",
                "coach.insights.trend.declining_message",
                json!({
                    "current_score": recent_score,
                    "previous_score": previous_score,
                    "change": change,
                }),
                true,
                true,
            )),
            _ => None,
        }
    }

    fn streak_insight(&self, streak: &PatternResult) -> Option<CoachInsight> {
        let SleepPattern::Consistent { score, days } = streak.pattern else {
            return None;
        };

        Some(self.insight(
            InsightCategory::OptimalStreak,
            InsightPriority::Info,
            "coach.insights.streak.title",
            "coach.insights.streak.message",
            json!({ "days": days, "score": score }),
            false,
            true,
        ))
    }

    fn insufficient_data_insight(&self, current_entries: usize) -> CoachInsight {
        self.insight(
            InsightCategory::InsufficientData,
            InsightPriority::Info,
            "coach.insights.insufficient.title",
            "coach.insights.insufficient.message",
            json!({
                "current_entries": current_entries,
                "required_entries": self.config.consistency.min_entries,
            }),
            false,
            // Represents a persistent app state, not a one-time notice
            false,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn insight(
        &self,
        category: InsightCategory,
        priority: InsightPriority,
        title: &str,
        message: &str,
        data: Value,
        actionable: bool,
        dismissible: bool,
    ) -> CoachInsight {
        CoachInsight {
            id: Uuid::new_v4(),
            category,
            priority,
            title: title.to_owned(),
            message: message.to_owned(),
            data,
            actionable,
            dismissible,
            created_at: self.clock.now_utc(),
        }
    }
}
