// ABOUTME: Core types and collaborator traits for the Somnia sleep platform
// ABOUTME: Foundation crate with error handling, domain models, history store, and clock abstraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

#![deny(unsafe_code)]

//! # Somnia Core
//!
//! Foundation crate providing shared types and collaborator traits for the
//! Somnia sleep intelligence platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain models (`ClockTime`, `SleepEntry`, `Settings`, `ReminderSchedule`)
//! - **history**: The sleep-history store seam and an in-memory reference implementation
//! - **clock**: Injectable time source for deterministic analysis and tests
//! - **notifications**: The push-delivery seam implemented by collaborators

/// Unified error handling with standard error codes
pub mod errors;

/// Core domain models (`ClockTime`, `SleepEntry`, `Settings`, `ReminderSchedule`)
pub mod models;

/// Sleep-history store trait and in-memory reference implementation
pub mod history;

/// Injectable time source (`Clock`, `SystemClock`, `FixedClock`)
pub mod clock;

/// Push-notification delivery seam
pub mod notifications;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{AppError, AppResult, ErrorCode};
pub use history::{HistoryStore, InMemoryHistory, MAX_HISTORY_ENTRIES};
pub use models::{
    ClockTime, Language, NewSleepEntry, ReminderSchedule, Settings, SettingsProvider, SleepEntry,
};
pub use notifications::{NotificationChannel, PushNotification};
