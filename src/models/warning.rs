//! Warning records.
//!
//! Every constraint the generator fails to satisfy is surfaced as a
//! warning accompanying the best-effort schedule, never as an error.
//! Each record pairs a category with a prebuilt human-readable message;
//! the message string is the compatibility surface, the kind lets
//! embedding applications filter without string matching.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ShiftType;

/// Categories of roster warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A day's night quota could not be filled.
    NightUnfilled,
    /// A checkpoint headcount stayed below its floor after all rescues.
    CoverageShortfall,
    /// A staff finished the month short of their day-off quota.
    OffDayShortfall,
    /// A consecutive workday run exceeds the tolerated cap.
    ConsecutiveOverrun,
    /// The one-day overrun allowance was used more than twice.
    OverrunBudgetExceeded,
    /// A night shift sits on a staff without night capability.
    IneligibleNight,
    /// A night shift falls on Friday, Saturday or Sunday for a
    /// weekday-only staff.
    NightOnRestrictedDay,
    /// A night shift is not followed by its morning-after rest.
    MissingNightRest,
    /// A through shift sits on a staff without overtime eligibility.
    IneligibleOvertime,
    /// A shift conflicts with a part-timer's early-only or late-only
    /// restriction.
    RestrictedShift,
}

/// A single roster warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Warning category.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
}

impl Warning {
    fn new(kind: WarningKind, message: String) -> Self {
        Self { kind, message }
    }

    /// A day's night quota could not be filled.
    pub fn night_unfilled(day: u32) -> Self {
        Self::new(
            WarningKind::NightUnfilled,
            format!("Day {day}: no eligible staff for the night shift"),
        )
    }

    /// A checkpoint headcount is below its floor.
    pub fn coverage_shortfall(day: u32, checkpoint: &str, count: u32, required: u32) -> Self {
        Self::new(
            WarningKind::CoverageShortfall,
            format!("Day {day}: {checkpoint} headcount {count} is below the required {required}"),
        )
    }

    /// A staff finished the month short of their day-off quota.
    pub fn off_day_shortfall(name: &str, off_days: u32, target: u32) -> Self {
        Self::new(
            WarningKind::OffDayShortfall,
            format!("{name}: {off_days} days off is short of the target {target}"),
        )
    }

    /// A run of workdays exceeds the tolerated cap.
    pub fn consecutive_overrun(name: &str, start_day: u32, length: u32, limit: u32) -> Self {
        Self::new(
            WarningKind::ConsecutiveOverrun,
            format!(
                "{name}: {length} consecutive workdays from day {start_day} exceeds the limit {limit}"
            ),
        )
    }

    /// The one-day overrun allowance was used more than twice.
    pub fn overrun_budget_exceeded(name: &str, used: u32) -> Self {
        Self::new(
            WarningKind::OverrunBudgetExceeded,
            format!("{name}: the one-day overrun allowance was used {used} times, at most 2 are tolerated"),
        )
    }

    /// Night shift on a staff without night capability.
    pub fn ineligible_night(name: &str, day: u32) -> Self {
        Self::new(
            WarningKind::IneligibleNight,
            format!("{name}: night shift on day {day} without night capability"),
        )
    }

    /// Night shift on Friday, Saturday or Sunday for a weekday-only staff.
    pub fn night_on_restricted_day(name: &str, day: u32) -> Self {
        Self::new(
            WarningKind::NightOnRestrictedDay,
            format!("{name}: night shift on day {day} falls on a Friday, Saturday or Sunday"),
        )
    }

    /// Night shift without its morning-after rest.
    pub fn missing_night_rest(name: &str, day: u32) -> Self {
        Self::new(
            WarningKind::MissingNightRest,
            format!("{name}: night shift on day {day} is not followed by the morning-after rest"),
        )
    }

    /// Through shift on a staff without overtime eligibility.
    pub fn ineligible_overtime(name: &str, day: u32) -> Self {
        Self::new(
            WarningKind::IneligibleOvertime,
            format!("{name}: through shift on day {day} without overtime eligibility"),
        )
    }

    /// Shift conflicting with an early-only or late-only restriction.
    pub fn restricted_shift(name: &str, day: u32, shift: ShiftType, side: &str) -> Self {
        Self::new(
            WarningKind::RestrictedShift,
            format!(
                "{name}: {} on day {day} conflicts with the {side}-only restriction",
                shift.label()
            ),
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_set_kind() {
        assert_eq!(Warning::night_unfilled(3).kind, WarningKind::NightUnfilled);
        assert_eq!(
            Warning::coverage_shortfall(5, "morning", 2, 4).kind,
            WarningKind::CoverageShortfall
        );
        assert_eq!(
            Warning::off_day_shortfall("Sato", 7, 9).kind,
            WarningKind::OffDayShortfall
        );
        assert_eq!(
            Warning::consecutive_overrun("Sato", 3, 6, 5).kind,
            WarningKind::ConsecutiveOverrun
        );
    }

    #[test]
    fn test_message_content() {
        let w = Warning::coverage_shortfall(12, "evening", 3, 4);
        assert_eq!(
            w.to_string(),
            "Day 12: evening headcount 3 is below the required 4"
        );

        let w = Warning::restricted_shift("Kimura", 4, ShiftType::Early, "late");
        assert_eq!(
            w.to_string(),
            "Kimura: early shift on day 4 conflicts with the late-only restriction"
        );
    }
}
