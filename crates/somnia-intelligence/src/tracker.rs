// ABOUTME: Record-and-analyze facade over the history, settings, and clock seams
// ABOUTME: One call validates input, computes the breakdown, persists the entry, and re-analyzes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use serde::{Deserialize, Serialize};

use somnia_core::clock::{Clock, SystemClock};
use somnia_core::errors::{AppError, AppResult};
use somnia_core::history::HistoryStore;
use somnia_core::models::{ClockTime, NewSleepEntry, SettingsProvider, SleepEntry};

use crate::config::IntelligenceConfig;
use crate::cycle_calculator::{SleepCalculation, SleepCycleCalculator};
use crate::insights::{CoachInsight, InsightGenerator};
use crate::schedule_analysis::{ScheduleAnalyzer, ScheduleStats};

/// Everything one calculation produces: the cycle breakdown, both ranked
/// recommendation lists, and the entry as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepResults {
    /// Cycle breakdown for the logged night
    pub calculation: SleepCalculation,
    /// Ranked bedtime options, most cycles first
    pub ideal_bedtimes: Vec<ClockTime>,
    /// Ranked wake-up options, fewest cycles first (starting at three)
    pub ideal_wakeup_times: Vec<ClockTime>,
    /// The history entry created for this calculation
    pub entry: SleepEntry,
}

/// Facade tying the engine to its collaborator seams.
///
/// Mirrors the application flow: the user submits a bedtime/wake-up pair,
/// the tracker validates the settings snapshot, computes the breakdown and
/// both recommendation lists, stamps the entry with the clock's date and the
/// top-ranked recommendations, and appends it to history. Analysis always
/// re-runs over a fresh snapshot of the store.
pub struct SleepTracker<S, C = SystemClock> {
    store: S,
    clock: C,
    config: IntelligenceConfig,
}

impl<S: HistoryStore> SleepTracker<S, SystemClock> {
    /// Create a tracker with the default configuration and system clock
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock, IntelligenceConfig::default())
    }
}

impl<S: HistoryStore, C: Clock> SleepTracker<S, C> {
    /// Create a tracker with an injected clock and configuration
    pub const fn with_clock(store: S, clock: C, config: IntelligenceConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Validate, calculate, and persist one logged night.
    ///
    /// Times arrive as the user typed them; this is the boundary where
    /// format and range validation happen, before any arithmetic runs.
    ///
    /// # Errors
    /// Returns `InvalidFormat`/`ValueOutOfRange` for malformed times or
    /// out-of-range settings, and propagates store failures.
    pub fn record(
        &mut self,
        settings: &impl SettingsProvider,
        bedtime: &str,
        wakeup_time: &str,
    ) -> AppResult<SleepResults> {
        let settings = settings.current();
        settings.validate()?;
        let bedtime: ClockTime = bedtime.parse()?;
        let wakeup_time: ClockTime = wakeup_time.parse()?;

        let calculation = SleepCycleCalculator::calculate(
            bedtime,
            wakeup_time,
            settings.sleep_latency_minutes,
            settings.cycle_length_minutes,
        )?;
        let ideal_bedtimes = SleepCycleCalculator::ideal_bedtimes(
            wakeup_time,
            settings.sleep_latency_minutes,
            settings.cycle_length_minutes,
            self.config.cycles.ideal_options,
        )?;
        let ideal_wakeup_times = SleepCycleCalculator::ideal_wakeup_times(
            bedtime,
            settings.sleep_latency_minutes,
            settings.cycle_length_minutes,
            self.config.cycles.ideal_options,
        )?;

        let ideal_bedtime = ideal_bedtimes
            .first()
            .copied()
            .ok_or_else(|| AppError::config_invalid("ideal_options must be at least 1"))?;
        let ideal_wakeup_time = ideal_wakeup_times
            .first()
            .copied()
            .ok_or_else(|| AppError::config_invalid("ideal_options must be at least 1"))?;

        let entry = self.store.append(NewSleepEntry {
            date: self.clock.today(),
            bedtime,
            wakeup_time,
            complete_cycles: calculation.complete_cycles,
            partial_cycle: calculation.partial_cycle,
            ideal_bedtime,
            ideal_wakeup_time,
        })?;

        Ok(SleepResults {
            calculation,
            ideal_bedtimes,
            ideal_wakeup_times,
            entry,
        })
    }

    /// Schedule statistics over the current history snapshot; `None` until
    /// enough entries exist.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn analyze(&self) -> AppResult<Option<ScheduleStats>> {
        let entries = self.store.load()?;
        Ok(ScheduleAnalyzer::analyze(&entries, &self.config.consistency))
    }

    /// All applicable coaching insights over the current history snapshot.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn insights(&self) -> AppResult<Vec<CoachInsight>> {
        let entries = self.store.load()?;
        let generator = InsightGenerator::with_clock(self.config.clone(), &self.clock);
        Ok(generator.generate(&entries))
    }

    /// The single most important insight to display.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn primary_insight(&self) -> AppResult<CoachInsight> {
        let entries = self.store.load()?;
        let generator = InsightGenerator::with_clock(self.config.clone(), &self.clock);
        Ok(generator.primary(&entries))
    }

    /// The current history snapshot, newest first.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn history(&self) -> AppResult<Vec<SleepEntry>> {
        self.store.load()
    }

    /// Remove all history.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn clear_history(&mut self) -> AppResult<()> {
        self.store.clear()
    }
}
