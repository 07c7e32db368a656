// ABOUTME: Wall-clock time-of-day value type with HH:MM parsing and wrapping arithmetic
// ABOUTME: Centralizes the boundary validation that the analysis layers rely on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

/// Minutes in one calendar day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day in the 24-hour `HH:MM` format.
///
/// All time strings entering the platform parse through this type, so the
/// analysis layers downstream never see a malformed or out-of-range time.
/// Arithmetic wraps across midnight; a `ClockTime` carries no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a time of day, validating the hour and minute ranges.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` when `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, AppError> {
        if hour > 23 {
            return Err(AppError::value_out_of_range(format!(
                "hour must be 0-23, got {hour}"
            )));
        }
        if minute > 59 {
            return Err(AppError::value_out_of_range(format!(
                "minute must be 0-59, got {minute}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0-23)
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component (0-59)
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight (0-1439)
    #[must_use]
    pub const fn minute_of_day(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Build a time from a minute offset, normalizing modulo 24 hours.
    ///
    /// Offsets beyond one day (e.g. "next-day" minute values produced by
    /// cross-midnight averaging) fold back onto the same wall-clock time.
    #[must_use]
    pub const fn from_minute_of_day(minutes: u32) -> Self {
        let normalized = minutes % MINUTES_PER_DAY;
        Self {
            hour: (normalized / 60) as u8,
            minute: (normalized % 60) as u8,
        }
    }

    /// Forward distance in minutes from `self` to `later`.
    ///
    /// A `later` value that reads earlier on the clock face is interpreted
    /// as belonging to the next day, so the result is always in 0-1439.
    #[must_use]
    pub const fn minutes_until(self, later: Self) -> u32 {
        (later.minute_of_day() + MINUTES_PER_DAY - self.minute_of_day()) % MINUTES_PER_DAY
    }

    /// Shift forward by the given number of minutes, wrapping past midnight
    #[must_use]
    pub const fn add_minutes(self, minutes: u32) -> Self {
        Self::from_minute_of_day(self.minute_of_day() + (minutes % MINUTES_PER_DAY))
    }

    /// Shift backward by the given number of minutes, wrapping past midnight
    #[must_use]
    pub fn sub_minutes(self, minutes: u32) -> Self {
        let offset = i64::from(self.minute_of_day()) - i64::from(minutes);
        Self::from_minute_of_day(offset.rem_euclid(i64::from(MINUTES_PER_DAY)) as u32)
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_format(format!("invalid time '{s}': expected HH:MM"))
        })?;
        let hour: u8 = hours.parse().map_err(|_| {
            AppError::invalid_format(format!("invalid time '{s}': hour is not a number"))
        })?;
        let minute: u8 = minutes.parse().map_err(|_| {
            AppError::invalid_format(format!("invalid time '{s}': minute is not a number"))
        })?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_and_formats_zero_padded() {
        let t: ClockTime = "07:05".parse().unwrap();
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "07:05");
    }

    #[test]
    fn accepts_single_digit_hours() {
        let t: ClockTime = "7:30".parse().unwrap();
        assert_eq!(t.to_string(), "07:30");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("730".parse::<ClockTime>().is_err());
        assert!("ab:cd".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
    }

    #[test]
    fn forward_distance_wraps_across_midnight() {
        let bed: ClockTime = "23:00".parse().unwrap();
        let wake: ClockTime = "07:00".parse().unwrap();
        assert_eq!(bed.minutes_until(wake), 480);
        assert_eq!(bed.minutes_until(bed), 0);
    }

    #[test]
    fn subtraction_wraps_backward_past_midnight() {
        let t: ClockTime = "00:30".parse().unwrap();
        assert_eq!(t.sub_minutes(60).to_string(), "23:30");
    }
}
