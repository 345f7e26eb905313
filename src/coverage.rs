//! Checkpoint presence counting.
//!
//! Coverage is judged at three fixed instants of the day. This module is
//! the single source of truth for "how many people are present at minute
//! T on day D": the night shift counts at the evening checkpoint through
//! its own span, the morning-after rest counts at the morning checkpoint,
//! and part-timer presence is resolved against the staff's own hours.
//! Every phase, warning and summary row counts through here.

use serde::{Deserialize, Serialize};

use crate::models::{ShiftTable, ShiftType, Staff};

/// Required headcount at every checkpoint on an ordinary day.
pub const WEEKDAY_REQUIRED: u32 = 4;

/// Relaxed morning/noon floor available on a limited number of Sundays.
pub const SUNDAY_RELAXED_REQUIRED: u32 = 3;

/// How many Sundays per month may run on the relaxed floor.
pub const SUNDAY_RELAXATION_BUDGET: u32 = 3;

/// One of the three fixed coverage instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Checkpoint {
    /// 07:00, start of the early shift.
    Morning,
    /// 10:00, mid-morning care round.
    Noon,
    /// 17:45, evening care round.
    Evening,
}

impl Checkpoint {
    /// The three checkpoints in day order.
    pub const ALL: [Checkpoint; 3] = [Checkpoint::Morning, Checkpoint::Noon, Checkpoint::Evening];

    /// The checkpoint instant as a minute of day.
    pub const fn minute(&self) -> u32 {
        match self {
            Checkpoint::Morning => 420,
            Checkpoint::Noon => 600,
            Checkpoint::Evening => 1065,
        }
    }

    /// Label used in warning messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Checkpoint::Morning => "morning",
            Checkpoint::Noon => "noon",
            Checkpoint::Evening => "evening",
        }
    }
}

/// Whether a staff holding `shift` is present at a minute of day.
pub fn present_at(staff: &Staff, shift: ShiftType, minute: u32) -> bool {
    match shift {
        ShiftType::Off => false,
        ShiftType::Part => staff.work_span().contains(minute),
        other => other.fixed_span().is_some_and(|span| span.contains(minute)),
    }
}

/// Headcount present at a minute of day across the whole roster.
pub fn count_at(table: &ShiftTable, staff: &[Staff], day: u32, minute: u32) -> u32 {
    staff
        .iter()
        .filter(|s| present_at(s, table.get(&s.id, day), minute))
        .count() as u32
}

/// Headcounts at the three checkpoints of a day, in day order.
pub fn checkpoint_counts(table: &ShiftTable, staff: &[Staff], day: u32) -> [u32; 3] {
    Checkpoint::ALL.map(|cp| count_at(table, staff, day, cp.minute()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_time_presence() {
        let s = Staff::full("s1", "Sato");
        // Morning checkpoint
        assert!(present_at(&s, ShiftType::Early, 420));
        assert!(present_at(&s, ShiftType::Overtime, 420));
        assert!(present_at(&s, ShiftType::NightOff, 420));
        assert!(!present_at(&s, ShiftType::Late, 420)); // starts 09:30
        assert!(!present_at(&s, ShiftType::Night, 420));
        // Evening checkpoint
        assert!(present_at(&s, ShiftType::Late, 1065));
        assert!(present_at(&s, ShiftType::Overtime, 1065));
        assert!(present_at(&s, ShiftType::Night, 1065));
        assert!(!present_at(&s, ShiftType::Early, 1065)); // ends 16:00
        assert!(!present_at(&s, ShiftType::NightOff, 1065));
        // Off is never present
        assert!(!present_at(&s, ShiftType::Off, 600));
    }

    #[test]
    fn test_part_presence_uses_own_hours() {
        let s = Staff::part("p1", "Kimura").with_hours("10:00", "15:00");
        assert!(present_at(&s, ShiftType::Part, 600));
        assert!(!present_at(&s, ShiftType::Part, 420));
        assert!(!present_at(&s, ShiftType::Part, 1065));
    }

    #[test]
    fn test_count_at() {
        let staff = vec![
            Staff::full("a", "A"),
            Staff::full("b", "B"),
            Staff::part("p", "P").with_hours("07:00", "12:00"),
        ];
        let mut table = ShiftTable::blank(&staff, 30);
        table.set("a", 1, ShiftType::Early);
        table.set("b", 1, ShiftType::Night);
        table.set("p", 1, ShiftType::Part);

        // Morning: Early and the part-timer
        assert_eq!(count_at(&table, &staff, 1, 420), 2);
        // Evening: only the night shift
        assert_eq!(count_at(&table, &staff, 1, 1065), 1);
        assert_eq!(checkpoint_counts(&table, &staff, 1), [2, 2, 1]);
    }

    #[test]
    fn test_night_rest_counts_next_morning() {
        let staff = vec![Staff::full("a", "A")];
        let mut table = ShiftTable::blank(&staff, 30);
        table.set("a", 1, ShiftType::Night);
        table.set("a", 2, ShiftType::NightOff);

        assert_eq!(count_at(&table, &staff, 2, 420), 1);
        assert_eq!(count_at(&table, &staff, 2, 600), 0); // rest ends 09:00
    }

    #[test]
    fn test_checkpoint_minutes() {
        assert_eq!(Checkpoint::Morning.minute(), 420);
        assert_eq!(Checkpoint::Noon.minute(), 600);
        assert_eq!(Checkpoint::Evening.minute(), 1065);
    }
}
