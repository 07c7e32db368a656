// ABOUTME: Injectable time source for deterministic analysis and tests
// ABOUTME: Clock trait with SystemClock (production) and FixedClock (tests)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

//! Injectable time source.
//!
//! The analysis and reminder layers never read the ambient wall clock
//! directly; they take a [`Clock`] so that "now", "today", and the current
//! weekday can be pinned in tests. Trend and streak detection are otherwise
//! not reproducible across midnight boundaries.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc, Weekday};

use crate::models::ClockTime;

/// Source of the current time and calendar day.
pub trait Clock {
    /// Current instant in UTC, used for record timestamps
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current wall-clock date and time in the user's timezone, used for
    /// reminder windows and entry dating
    fn local_now(&self) -> NaiveDateTime;

    /// Current local calendar date
    fn today(&self) -> NaiveDate {
        self.local_now().date()
    }

    /// Current local day of week
    fn weekday(&self) -> Weekday {
        self.today().weekday()
    }

    /// Current local time of day, truncated to the minute
    fn local_time(&self) -> ClockTime {
        let now = self.local_now().time();
        ClockTime::from_minute_of_day(now.hour() * 60 + now.minute())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }

    fn local_now(&self) -> NaiveDateTime {
        (**self).local_now()
    }
}

/// Production clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test clock pinned to a single instant.
///
/// The local time is taken verbatim and the UTC instant is derived from it,
/// which keeps the two frames consistent for assertions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pinned: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to the given local date and time
    #[must_use]
    pub const fn at(pinned: NaiveDateTime) -> Self {
        Self { pinned }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.pinned)
    }

    fn local_now(&self) -> NaiveDateTime {
        self.pinned
    }
}
