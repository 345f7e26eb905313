//! Placement admission predicates.
//!
//! Pure checks over one staff row: consecutive-run accounting (days off
//! and the morning-after rest both break runs), the derived run cap, the
//! workday admission test with its one-day overrun allowance, and the
//! night-shift admission test with its trailing rest window.

use std::collections::HashMap;

use crate::calendar::Month;
use crate::models::{NightCapability, Settings, ShiftType, Staff, StaffKind};

/// Monthly uses of the one-day overrun allowance tolerated per staff.
pub const OVERRUN_ALLOWANCE: u32 = 2;

/// Derived run cap for night-capable full-timers.
const NIGHT_CAPABLE_MAX_CONSECUTIVE: u32 = 2;

/// The consecutive-workday cap in force for a staff.
///
/// A per-person override wins; otherwise night-capable full-timers get
/// the short derived cap and everyone else the global default.
pub fn effective_max_consecutive(staff: &Staff, settings: &Settings) -> u32 {
    if staff.max_consecutive_override > 0 {
        staff.max_consecutive_override
    } else if staff.kind == StaffKind::Full && staff.night != NightCapability::None {
        NIGHT_CAPABLE_MAX_CONSECUTIVE
    } else {
        settings.max_consecutive
    }
}

/// Length of the workday run ending on `day - 1`.
pub fn run_before(row: &[ShiftType], day: u32) -> u32 {
    let mut count = 0;
    for d in (1..day).rev() {
        match row.get((d - 1) as usize) {
            Some(shift) if shift.is_workday() => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the workday run starting on `day + 1`.
pub fn run_after(row: &[ShiftType], day: u32) -> u32 {
    let mut count = 0;
    for d in (day + 1)..=(row.len() as u32) {
        match row.get((d - 1) as usize) {
            Some(shift) if shift.is_workday() => count += 1,
            _ => break,
        }
    }
    count
}

/// Whether placing a workday on `day` keeps the joined run within `max`.
pub fn fits_consecutive(row: &[ShiftType], day: u32, max: u32) -> bool {
    run_before(row, day) + 1 + run_after(row, day) <= max
}

/// How a candidate workday placement was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunFit {
    /// The joined run stays within the cap.
    Within,
    /// The joined run is exactly one day over and consumes the staff's
    /// overrun allowance.
    PlusOne,
}

/// Month-scoped tracker of the one-day overrun allowance.
///
/// Lives only for the duration of one generation run.
#[derive(Debug, Clone, Default)]
pub struct OverrunBudget {
    used: HashMap<String, u32>,
}

impl OverrunBudget {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses of the allowance so far for a staff.
    pub fn used(&self, staff_id: &str) -> u32 {
        self.used.get(staff_id).copied().unwrap_or(0)
    }

    /// Whether the staff may consume another overrun.
    pub fn has_allowance(&self, staff_id: &str) -> bool {
        self.used(staff_id) < OVERRUN_ALLOWANCE
    }

    /// Records one consumed overrun.
    pub fn mark(&mut self, staff_id: &str) {
        *self.used.entry(staff_id.to_string()).or_insert(0) += 1;
    }
}

/// Workday admission test for `day`.
///
/// The cell must be free, and the run that would result from joining the
/// backward and forward neighbours must fit the cap. A run of exactly
/// `max + 1` is admitted only for consenting staff with allowance left;
/// the caller marks the budget when it actually assigns.
pub fn can_work_on(
    staff: &Staff,
    row: &[ShiftType],
    day: u32,
    max: u32,
    budget: &OverrunBudget,
) -> Option<RunFit> {
    let cell = row.get((day - 1) as usize)?;
    if *cell != ShiftType::Off {
        return None;
    }
    let total = run_before(row, day) + 1 + run_after(row, day);
    if total <= max {
        Some(RunFit::Within)
    } else if total == max + 1
        && staff.allow_consecutive_plus_one
        && budget.has_allowance(&staff.id)
    {
        Some(RunFit::PlusOne)
    } else {
        None
    }
}

/// Night-shift admission test for `day`.
///
/// Beyond capability and the Friday-through-Sunday restriction, the
/// whole three-cell window `day .. day + 2` must still be free: the
/// morning-after rest is forced onto `day + 1`, and `day + 2` is left
/// untouched for later phases but may not already hold work. The forward
/// run check starts at `day + 2` because the rest breaks the run.
pub fn can_assign_night(staff: &Staff, row: &[ShiftType], day: u32, month: &Month, max: u32) -> bool {
    if staff.kind == StaffKind::Part || staff.night == NightCapability::None {
        return false;
    }
    if staff.night == NightCapability::WeekdayOnly && month.is_weekend_night(day) {
        return false;
    }
    let days = month.days();
    for d in day..=(day + 2).min(days) {
        if row.get((d - 1) as usize) != Some(&ShiftType::Off) {
            return false;
        }
    }
    let past = run_before(row, day);
    if past + 1 > max {
        return false;
    }
    past + 1 + run_after(row, day + 1) <= max
}
