//! Staff roster model.
//!
//! A staff record carries the capability flags and monthly quotas the
//! generator consults: employment kind, night-shift capability, the
//! through-shift flag, part-timer side restrictions and working hours,
//! and the day-off and consecutive-run budgets.
//!
//! Behavior varies along two independent enumerated axes, kind and night
//! capability. Both are plain enums matched exhaustively at each decision
//! point rather than a type hierarchy.

use serde::{Deserialize, Serialize};

use super::TimeSpan;

/// Default part-timer working hours, 09:00-17:00.
const DEFAULT_START: u32 = 540;
const DEFAULT_END: u32 = 1020;

/// Employment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffKind {
    /// Full-time staff: eligible for day shifts, nights and through shifts.
    Full,
    /// Part-time staff: works only their own hours as `Part` cells.
    Part,
}

/// Night-shift capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NightCapability {
    /// Never assigned a night shift.
    None,
    /// Night shifts on Monday through Thursday only.
    WeekdayOnly,
    /// Night shifts on any day.
    AllDays,
}

/// A member of the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Stable opaque identifier.
    pub id: String,
    /// Display name, used in warning messages.
    pub name: String,
    /// Employment kind.
    pub kind: StaffKind,
    /// Night-shift capability.
    pub night: NightCapability,
    /// Whether eligible for the combined through shift.
    pub can_overtime: bool,
    /// Part-timer restriction: early-side shifts only.
    pub early_only: bool,
    /// Part-timer restriction: late-side shifts only.
    pub late_only: bool,
    /// Monthly day-off quota.
    pub monthly_days_off_target: u32,
    /// Weekly workday cap; meaningful for part kind only.
    pub max_days_per_week: u32,
    /// Per-person consecutive-run cap; zero means "use the derived default".
    pub max_consecutive_override: u32,
    /// Working-hours start as "HH:MM"; part kind only.
    pub start_time: String,
    /// Working-hours end as "HH:MM"; part kind only.
    pub end_time: String,
    /// Whether up to two monthly one-day overruns of the run cap are tolerated.
    pub allow_consecutive_plus_one: bool,
}

impl Staff {
    fn new(id: impl Into<String>, name: impl Into<String>, kind: StaffKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            night: NightCapability::None,
            can_overtime: false,
            early_only: false,
            late_only: false,
            monthly_days_off_target: 9,
            max_days_per_week: 3,
            max_consecutive_override: 0,
            start_time: "09:00".into(),
            end_time: "17:00".into(),
            allow_consecutive_plus_one: false,
        }
    }

    /// Creates a full-time staff record.
    pub fn full(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, StaffKind::Full)
    }

    /// Creates a part-time staff record.
    pub fn part(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, StaffKind::Part)
    }

    /// Sets the night-shift capability.
    pub fn with_night(mut self, night: NightCapability) -> Self {
        self.night = night;
        self
    }

    /// Maps the legacy boolean night flag onto the capability enum.
    pub fn with_legacy_night(self, can_night: bool) -> Self {
        self.with_night(if can_night {
            NightCapability::AllDays
        } else {
            NightCapability::None
        })
    }

    /// Sets through-shift eligibility.
    pub fn with_overtime(mut self, can_overtime: bool) -> Self {
        self.can_overtime = can_overtime;
        self
    }

    /// Restricts a part-timer to early-side shifts.
    pub fn early_only(mut self) -> Self {
        self.early_only = true;
        self.late_only = false;
        self
    }

    /// Restricts a part-timer to late-side shifts.
    pub fn late_only(mut self) -> Self {
        self.late_only = true;
        self.early_only = false;
        self
    }

    /// Sets the monthly day-off quota.
    pub fn with_days_off_target(mut self, days: u32) -> Self {
        self.monthly_days_off_target = days;
        self
    }

    /// Sets the weekly workday cap.
    pub fn with_max_days_per_week(mut self, days: u32) -> Self {
        self.max_days_per_week = days;
        self
    }

    /// Sets the per-person consecutive-run cap (zero = derived default).
    pub fn with_max_consecutive(mut self, max: u32) -> Self {
        self.max_consecutive_override = max;
        self
    }

    /// Sets the part-timer working hours as "HH:MM" strings.
    pub fn with_hours(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Tolerates up to two monthly one-day overruns of the run cap.
    pub fn with_consecutive_plus_one(mut self) -> Self {
        self.allow_consecutive_plus_one = true;
        self
    }

    /// The working-hours span for `Part` cells.
    ///
    /// Unparseable or inverted times fall back to 09:00-17:00.
    pub fn work_span(&self) -> TimeSpan {
        let start = parse_hhmm(&self.start_time).unwrap_or(DEFAULT_START);
        let end = parse_hhmm(&self.end_time).unwrap_or(DEFAULT_END);
        if end <= start {
            return TimeSpan::new(DEFAULT_START, DEFAULT_END);
        }
        TimeSpan::new(start, end)
    }
}

/// Parses "HH:MM" into a minute of day.
fn parse_hhmm(text: &str) -> Option<u32> {
    let (h, m) = text.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    if h >= 24 || m >= 60 {
        return None;
    }
    Some(h * 60 + m)
}
