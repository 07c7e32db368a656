// ABOUTME: User settings model with domain-validated numeric bounds
// ABOUTME: Settings snapshot consumed by the calculators plus the read-only provider seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Display language for user-facing content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Brazilian Portuguese (product default)
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English
    #[serde(rename = "en")]
    En,
    /// Spanish
    #[serde(rename = "es")]
    Es,
    /// French
    #[serde(rename = "fr")]
    Fr,
    /// German
    #[serde(rename = "de")]
    De,
}

/// User settings consumed by the calculation and insight layers.
///
/// Changes take effect on the next calculation, never retroactively; callers
/// pass a snapshot, not a live reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Minutes per sleep cycle
    pub cycle_length_minutes: u32,
    /// Minutes between lying down and falling asleep
    pub sleep_latency_minutes: u32,
    /// Display language
    pub language: Language,
    /// Whether bedtime reminders are enabled
    pub notifications_enabled: bool,
}

impl Settings {
    /// Acceptable cycle length range in minutes
    pub const CYCLE_LENGTH_RANGE: RangeInclusive<u32> = 60..=120;
    /// Acceptable sleep latency range in minutes
    pub const SLEEP_LATENCY_RANGE: RangeInclusive<u32> = 0..=60;

    /// Validate the numeric bounds.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` naming the offending field when the cycle
    /// length or sleep latency lies outside its domain range.
    pub fn validate(&self) -> AppResult<()> {
        if !Self::CYCLE_LENGTH_RANGE.contains(&self.cycle_length_minutes) {
            return Err(AppError::value_out_of_range(format!(
                "cycle length must be {}-{} minutes, got {}",
                Self::CYCLE_LENGTH_RANGE.start(),
                Self::CYCLE_LENGTH_RANGE.end(),
                self.cycle_length_minutes
            )));
        }
        if !Self::SLEEP_LATENCY_RANGE.contains(&self.sleep_latency_minutes) {
            return Err(AppError::value_out_of_range(format!(
                "sleep latency must be {}-{} minutes, got {}",
                Self::SLEEP_LATENCY_RANGE.start(),
                Self::SLEEP_LATENCY_RANGE.end(),
                self.sleep_latency_minutes
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cycle_length_minutes: 90,
            sleep_latency_minutes: 15,
            language: Language::default(),
            notifications_enabled: false,
        }
    }
}

/// Read-only access to the current settings at the moment of calculation
pub trait SettingsProvider {
    /// Snapshot of the current settings
    fn current(&self) -> Settings;
}

/// A plain settings value acts as its own provider, which keeps call sites
/// and tests free of wrapper types.
impl SettingsProvider for Settings {
    fn current(&self) -> Settings {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cycle_length_minutes, 90);
        assert_eq!(settings.sleep_latency_minutes, 15);
        assert_eq!(settings.language, Language::PtBr);
        assert!(!settings.notifications_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_cycle_length() {
        let settings = Settings {
            cycle_length_minutes: 45,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_latency() {
        let settings = Settings {
            sleep_latency_minutes: 90,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
