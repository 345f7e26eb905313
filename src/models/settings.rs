//! Generation settings.
//!
//! A flat option record with documented defaults. The checkpoint floor
//! table, the overtime cap and the Sunday-relaxation budget are design
//! constants and deliberately not configurable here.

use serde::{Deserialize, Serialize};

/// Options recognized by the generator.
///
/// `early_required` and `late_required` are accepted for compatibility
/// with stored option sets but the checkpoint phases are governed by the
/// fixed floor table; only the night quotas steer placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Early-shift headcount option (recognized, not used for placement).
    pub early_required: u32,
    /// Late-shift headcount option (recognized, not used for placement).
    pub late_required: u32,
    /// Night headcount per weekday.
    pub night_required: u32,
    /// Early-shift headcount option for Sundays (recognized, unused).
    pub sunday_early_required: u32,
    /// Late-shift headcount option for Sundays (recognized, unused).
    pub sunday_late_required: u32,
    /// Night headcount per Sunday.
    pub sunday_night_required: u32,
    /// Global consecutive-workday cap for staff without a derived or
    /// per-person override.
    pub max_consecutive: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            early_required: 3,
            late_required: 3,
            night_required: 1,
            sunday_early_required: 3,
            sunday_late_required: 2,
            sunday_night_required: 1,
            max_consecutive: 5,
        }
    }
}

impl Settings {
    /// Creates settings with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekday night quota.
    pub fn with_night_required(mut self, count: u32) -> Self {
        self.night_required = count;
        self
    }

    /// Sets the Sunday night quota.
    pub fn with_sunday_night_required(mut self, count: u32) -> Self {
        self.sunday_night_required = count;
        self
    }

    /// Sets the global consecutive-workday cap.
    pub fn with_max_consecutive(mut self, max: u32) -> Self {
        self.max_consecutive = max;
        self
    }
}
