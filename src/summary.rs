//! Aggregated schedule metrics.
//!
//! Read-only rollup of a completed table for display consumers: the
//! per-day checkpoint headcounts a coverage row renders, and per-staff
//! totals for the month. Counts go through the same presence predicate
//! the generator uses, so the numbers here always agree with the
//! warnings.

use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::coverage;
use crate::models::{ShiftTable, ShiftType, Staff};
use crate::scoring;

/// Checkpoint headcounts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCoverage {
    /// 1-based day of month.
    pub day: u32,
    /// Heads present at the morning checkpoint.
    pub morning: u32,
    /// Heads present at the noon checkpoint.
    pub noon: u32,
    /// Heads present at the evening checkpoint.
    pub evening: u32,
}

/// Month totals for one staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffTotals {
    /// Staff identifier.
    pub staff_id: String,
    /// Workday cells.
    pub workdays: u32,
    /// Plain day-off cells.
    pub off_days: u32,
    /// Early shifts.
    pub early: u32,
    /// Late shifts.
    pub late: u32,
    /// Night shifts.
    pub nights: u32,
    /// Morning-after rests.
    pub night_rests: u32,
    /// Through shifts.
    pub overtime: u32,
    /// Part-timer shifts.
    pub part: u32,
}

/// Per-day and per-staff rollup of a completed month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// One entry per day, ascending.
    pub days: Vec<DayCoverage>,
    /// One entry per staff, roster order.
    pub staff: Vec<StaffTotals>,
}

impl MonthlySummary {
    /// Computes the rollup. An unrepresentable month yields an empty
    /// summary.
    pub fn calculate(staff: &[Staff], table: &ShiftTable, year: i32, month: u32) -> Self {
        let Some(month) = Month::new(year, month) else {
            return Self::default();
        };

        let days = (1..=month.days())
            .map(|day| {
                let counts = coverage::checkpoint_counts(table, staff, day);
                DayCoverage {
                    day,
                    morning: counts[0],
                    noon: counts[1],
                    evening: counts[2],
                }
            })
            .collect();

        let staff = staff
            .iter()
            .map(|s| {
                let row = table.row(&s.id).unwrap_or(&[]);
                StaffTotals {
                    staff_id: s.id.clone(),
                    workdays: scoring::workdays(row),
                    off_days: scoring::off_days(row),
                    early: scoring::count_shift(row, ShiftType::Early),
                    late: scoring::count_shift(row, ShiftType::Late),
                    nights: scoring::count_shift(row, ShiftType::Night),
                    night_rests: scoring::count_shift(row, ShiftType::NightOff),
                    overtime: scoring::count_shift(row, ShiftType::Overtime),
                    part: scoring::count_shift(row, ShiftType::Part),
                }
            })
            .collect();

        Self { days, staff }
    }
}
