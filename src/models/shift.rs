//! Shift vocabulary and the minute-of-day time model.
//!
//! The workday is measured in minutes since midnight. Every full-time
//! shift value owns a fixed half-open span; the part-timer shift borrows
//! its span from the owning staff record, so span resolution for it lives
//! at the presence predicate, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval [start, end) in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Span start (minute of day, inclusive).
    pub start: u32,
    /// Span end (minute of day, exclusive).
    pub end: u32,
}

impl TimeSpan {
    /// Creates a new span.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether a minute of day falls within this span.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Span length in minutes.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// The closed set of assignable shift values.
///
/// `Off` and `NightOff` are rest values; the rest are workdays. `Night`
/// runs to midnight and is what makes a day's evening headcount; the
/// paired `NightOff` morning-after covers the next day's morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Early day shift, 07:00-16:00.
    Early,
    /// Late day shift, 09:30-18:30.
    Late,
    /// Night shift, 17:00 to midnight.
    Night,
    /// Morning-after rest following a night shift; present until 09:00.
    NightOff,
    /// Day off.
    Off,
    /// Combined early-through-late shift, 07:00-18:30.
    Overtime,
    /// Part-timer shift; span comes from the staff record.
    Part,
}

impl ShiftType {
    /// All assignable values, in display order.
    pub const ALL: [ShiftType; 7] = [
        ShiftType::Early,
        ShiftType::Late,
        ShiftType::Night,
        ShiftType::NightOff,
        ShiftType::Off,
        ShiftType::Overtime,
        ShiftType::Part,
    ];

    /// The fixed presence span, if this value has one.
    ///
    /// `Off` has no presence and `Part` resolves against the owning
    /// staff record, so both return `None`.
    pub const fn fixed_span(&self) -> Option<TimeSpan> {
        match self {
            ShiftType::Early => Some(TimeSpan::new(420, 960)),
            ShiftType::Late => Some(TimeSpan::new(570, 1110)),
            ShiftType::Night => Some(TimeSpan::new(1020, 1440)),
            ShiftType::NightOff => Some(TimeSpan::new(0, 540)),
            ShiftType::Overtime => Some(TimeSpan::new(420, 1110)),
            ShiftType::Off | ShiftType::Part => None,
        }
    }

    /// Whether this value counts as a workday.
    ///
    /// `Off` and `NightOff` break consecutive-run accounting; conflating
    /// the two is the classic rostering bug, so the distinction is made
    /// exactly once, here.
    pub const fn is_workday(&self) -> bool {
        !matches!(self, ShiftType::Off | ShiftType::NightOff)
    }

    /// Single-cell display token used on printed rosters.
    pub const fn token(&self) -> &'static str {
        match self {
            ShiftType::Early => "A",
            ShiftType::Late => "B",
            ShiftType::Night => "夜",
            ShiftType::NightOff => "明",
            ShiftType::Off => "休",
            ShiftType::Overtime => "A残",
            ShiftType::Part => "P",
        }
    }

    /// English label used in warning messages.
    pub const fn label(&self) -> &'static str {
        match self {
            ShiftType::Early => "early shift",
            ShiftType::Late => "late shift",
            ShiftType::Night => "night shift",
            ShiftType::NightOff => "morning-after rest",
            ShiftType::Off => "day off",
            ShiftType::Overtime => "through shift",
            ShiftType::Part => "part shift",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_span_contains() {
        let s = TimeSpan::new(420, 960);
        assert!(s.contains(420));
        assert!(s.contains(959));
        assert!(!s.contains(960)); // exclusive end
        assert!(!s.contains(0));
        assert_eq!(s.duration(), 540);
    }

    #[test]
    fn test_fixed_spans() {
        assert_eq!(ShiftType::Early.fixed_span(), Some(TimeSpan::new(420, 960)));
        assert_eq!(ShiftType::Late.fixed_span(), Some(TimeSpan::new(570, 1110)));
        assert_eq!(
            ShiftType::Overtime.fixed_span(),
            Some(TimeSpan::new(420, 1110))
        );
        assert_eq!(
            ShiftType::Night.fixed_span(),
            Some(TimeSpan::new(1020, 1440))
        );
        assert_eq!(ShiftType::NightOff.fixed_span(), Some(TimeSpan::new(0, 540)));
        assert_eq!(ShiftType::Off.fixed_span(), None);
        assert_eq!(ShiftType::Part.fixed_span(), None);
    }

    #[test]
    fn test_workday_predicate() {
        assert!(ShiftType::Early.is_workday());
        assert!(ShiftType::Late.is_workday());
        assert!(ShiftType::Night.is_workday());
        assert!(ShiftType::Overtime.is_workday());
        assert!(ShiftType::Part.is_workday());
        assert!(!ShiftType::Off.is_workday());
        assert!(!ShiftType::NightOff.is_workday());
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(ShiftType::Early.to_string(), "A");
        assert_eq!(ShiftType::Overtime.to_string(), "A残");
        assert_eq!(ShiftType::Night.token(), "夜");
        assert_eq!(ShiftType::NightOff.token(), "明");
        assert_eq!(ShiftType::Off.token(), "休");
        assert_eq!(ShiftType::Part.token(), "P");
    }
}
