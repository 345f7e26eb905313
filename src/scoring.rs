//! Fairness counters.
//!
//! Pure aggregations over one staff row: per-shift counts, workday and
//! off-day totals, the monthly workday target and the gap to it, and the
//! Monday-to-Sunday weekly count the part-timer cap is judged against.

use crate::calendar::Month;
use crate::models::{ShiftType, Staff};

/// Hard monthly cap on through shifts per staff.
pub const OVERTIME_MONTHLY_CAP: u32 = 6;

/// Soft monthly target; routine placement stops here and only coverage
/// rescues push further.
pub const OVERTIME_SOFT_TARGET: u32 = 5;

/// Occurrences of a shift value in the row.
pub fn count_shift(row: &[ShiftType], shift: ShiftType) -> u32 {
    row.iter().filter(|&&s| s == shift).count() as u32
}

/// Workday cells in the row (days off and morning-after rests excluded).
pub fn workdays(row: &[ShiftType]) -> u32 {
    row.iter().filter(|s| s.is_workday()).count() as u32
}

/// Plain day-off cells in the row. The morning-after rest is not a day
/// off for quota purposes.
pub fn off_days(row: &[ShiftType]) -> u32 {
    count_shift(row, ShiftType::Off)
}

/// Monthly workday target for a staff.
///
/// Morning-after rests occupy cells without counting as either workdays
/// or days off, so they reduce the target.
pub fn target_workdays(staff: &Staff, row: &[ShiftType], days: u32) -> i32 {
    days as i32 - staff.monthly_days_off_target as i32 - count_shift(row, ShiftType::NightOff) as i32
}

/// Target workdays minus actual workdays; positive means still short.
pub fn work_gap(staff: &Staff, row: &[ShiftType], days: u32) -> i32 {
    target_workdays(staff, row, days) - workdays(row) as i32
}

/// Workdays in the Monday-to-Sunday week containing `day`.
pub fn week_workdays(row: &[ShiftType], month: &Month, day: u32) -> u32 {
    let (first, last) = month.week_bounds(day);
    (first..=last)
        .filter(|&d| {
            row.get((d - 1) as usize)
                .is_some_and(|shift| shift.is_workday())
        })
        .count() as u32
}

/// Through shifts assigned so far this month.
pub fn overtime_count(row: &[ShiftType]) -> u32 {
    count_shift(row, ShiftType::Overtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ShiftType::{Early, Late, Night, NightOff, Off, Overtime};

    #[test]
    fn test_counts() {
        let row = [Early, Early, Late, Night, NightOff, Off, Overtime];
        assert_eq!(count_shift(&row, Early), 2);
        assert_eq!(count_shift(&row, Night), 1);
        assert_eq!(workdays(&row), 5);
        assert_eq!(off_days(&row), 1);
        assert_eq!(overtime_count(&row), 1);
    }

    #[test]
    fn test_target_and_gap() {
        let s = Staff::full("a", "A").with_days_off_target(9);
        let mut row = vec![Off; 30];
        assert_eq!(target_workdays(&s, &row, 30), 21);
        assert_eq!(work_gap(&s, &row, 30), 21);

        row[0] = Night;
        row[1] = NightOff;
        // The rest cell lowers the target and the night raises workdays
        assert_eq!(target_workdays(&s, &row, 30), 20);
        assert_eq!(work_gap(&s, &row, 30), 19);
    }

    #[test]
    fn test_week_workdays() {
        // March 2025: Mon 3 .. Sun 9 is a full calendar week
        let month = Month::new(2025, 3).unwrap();
        let mut row = vec![Off; 31];
        row[2] = Early; // Mon 3
        row[4] = Late; // Wed 5
        row[8] = Early; // Sun 9
        row[9] = Early; // Mon 10, next week

        assert_eq!(week_workdays(&row, &month, 5), 3);
        assert_eq!(week_workdays(&row, &month, 9), 3);
        assert_eq!(week_workdays(&row, &month, 10), 1);
        // The clamped first week holds days 1 and 2 only
        assert_eq!(week_workdays(&row, &month, 1), 0);
    }
}
