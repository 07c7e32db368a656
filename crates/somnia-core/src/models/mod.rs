// ABOUTME: Core domain models for the Somnia platform
// ABOUTME: Re-exports ClockTime, SleepEntry, Settings, and ReminderSchedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

//! Domain models shared across the workspace.

/// Wall-clock time-of-day value type
pub mod clock_time;

/// Bedtime reminder schedule
pub mod reminder;

/// User settings and the read-only provider seam
pub mod settings;

/// Sleep history entries
pub mod sleep;

pub use clock_time::{ClockTime, MINUTES_PER_DAY};
pub use reminder::ReminderSchedule;
pub use settings::{Language, Settings, SettingsProvider};
pub use sleep::{NewSleepEntry, SleepEntry};
