//! Month calendar arithmetic.
//!
//! A `Month` resolves day counts and weekdays once, so the rest of the
//! crate can reason in 1-based day-of-month numbers without touching
//! date construction again.

use chrono::{Datelike, NaiveDate, Weekday};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A calendar month with resolved length and weekday layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    year: i32,
    month: u32,
    days: u32,
    first_weekday: Weekday,
}

impl Month {
    /// Resolves a (year, 1-based month) pair.
    ///
    /// Returns `None` when the pair does not name a representable month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            year,
            month,
            days: (next - first).num_days() as u32,
            first_weekday: first.weekday(),
        })
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Weekday of a 1-based day of this month.
    pub fn weekday(&self, day: u32) -> Weekday {
        let offset = (self.first_weekday.num_days_from_monday() + day - 1) % 7;
        WEEK[offset as usize]
    }

    /// Whether the day is a Sunday.
    pub fn is_sunday(&self, day: u32) -> bool {
        self.weekday(day) == Weekday::Sun
    }

    /// Whether the day is a Friday, Saturday or Sunday.
    ///
    /// These are the days a weekday-only staff may not take a night
    /// shift on.
    pub fn is_weekend_night(&self, day: u32) -> bool {
        matches!(
            self.weekday(day),
            Weekday::Fri | Weekday::Sat | Weekday::Sun
        )
    }

    /// The Monday-to-Sunday week containing `day`, clamped to the month.
    ///
    /// Returns 1-based (first, last) day numbers.
    pub fn week_bounds(&self, day: u32) -> (u32, u32) {
        let offset = self.weekday(day).num_days_from_monday() as i64;
        let monday = day as i64 - offset;
        let sunday = monday + 6;
        (monday.max(1) as u32, sunday.min(self.days as i64) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths() {
        assert_eq!(Month::new(2025, 2).unwrap().days(), 28);
        assert_eq!(Month::new(2024, 2).unwrap().days(), 29); // leap year
        assert_eq!(Month::new(2025, 4).unwrap().days(), 30);
        assert_eq!(Month::new(2025, 12).unwrap().days(), 31);
    }

    #[test]
    fn test_invalid_month() {
        assert!(Month::new(2025, 0).is_none());
        assert!(Month::new(2025, 13).is_none());
    }

    #[test]
    fn test_weekdays() {
        // March 2025 starts on a Saturday
        let m = Month::new(2025, 3).unwrap();
        assert_eq!(m.weekday(1), Weekday::Sat);
        assert_eq!(m.weekday(2), Weekday::Sun);
        assert_eq!(m.weekday(3), Weekday::Mon);
        assert_eq!(m.weekday(31), Weekday::Mon);
    }

    #[test]
    fn test_sunday_predicate() {
        let m = Month::new(2025, 3).unwrap();
        let sundays: Vec<u32> = (1..=m.days()).filter(|&d| m.is_sunday(d)).collect();
        assert_eq!(sundays, vec![2, 9, 16, 23, 30]);
    }

    #[test]
    fn test_weekend_night_predicate() {
        let m = Month::new(2025, 3).unwrap();
        assert!(m.is_weekend_night(7)); // Friday
        assert!(m.is_weekend_night(1)); // Saturday
        assert!(m.is_weekend_night(2)); // Sunday
        assert!(!m.is_weekend_night(3)); // Monday
        assert!(!m.is_weekend_night(6)); // Thursday
    }

    #[test]
    fn test_week_bounds() {
        let m = Month::new(2025, 3).unwrap();
        // Day 1 is a Saturday; its week began the previous Monday,
        // clamped to the 1st.
        assert_eq!(m.week_bounds(1), (1, 2));
        // Day 5 (Wednesday) sits in the Mon 3 .. Sun 9 week.
        assert_eq!(m.week_bounds(5), (3, 9));
        // Day 31 (Monday) opens a week that runs past month end.
        assert_eq!(m.week_bounds(31), (31, 31));
    }
}
