//! Post-hoc validation of a completed assignment table.
//!
//! Re-examines a finished month and emits one warning per detected
//! hard-rule violation. The generator runs this as its final phase, so
//! anything it ever produces in violation of a hard rule is at least
//! reported; callers also run it directly on operator-edited tables.

use crate::calendar::Month;
use crate::eligibility::{effective_max_consecutive, OVERRUN_ALLOWANCE};
use crate::models::{
    NightCapability, Settings, ShiftTable, ShiftType, Staff, StaffKind, Warning,
};

/// Validates a completed table against the hard rules.
///
/// Checks, per staff: consecutive runs against the tolerated cap and
/// the one-day overrun allowance, night eligibility and its
/// day-of-week restriction, the forced morning-after rest, through-shift
/// eligibility, and part-timer side restrictions.
pub fn validate(
    staff: &[Staff],
    table: &ShiftTable,
    year: i32,
    month: u32,
    settings: &Settings,
) -> Vec<Warning> {
    let Some(month) = Month::new(year, month) else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    for s in staff {
        let Some(row) = table.row(&s.id) else {
            continue;
        };
        check_consecutive_runs(s, row, settings, &mut warnings);
        check_night_cells(s, row, &month, &mut warnings);
        check_night_rest(s, row, &mut warnings);
        check_overtime_cells(s, row, &mut warnings);
        check_side_restrictions(s, row, &mut warnings);
    }
    warnings
}

/// Probes a single cell edit without committing it.
///
/// Applies `new_shift` to a copy of the staff's row and reruns the
/// checks an operator edit can break: run length, night eligibility and
/// day of week, through-shift eligibility and side restrictions.
pub fn edit_warnings(
    table: &ShiftTable,
    staff: &Staff,
    day: u32,
    new_shift: ShiftType,
    year: i32,
    month: u32,
    settings: &Settings,
) -> Vec<Warning> {
    let Some(month) = Month::new(year, month) else {
        return Vec::new();
    };
    if day == 0 || day > month.days() {
        return Vec::new();
    }

    let mut row = match table.row(&staff.id) {
        Some(row) => row.to_vec(),
        None => vec![ShiftType::Off; month.days() as usize],
    };
    row[(day - 1) as usize] = new_shift;

    let mut warnings = Vec::new();
    check_consecutive_runs(staff, &row, settings, &mut warnings);
    check_night_cells(staff, &row, &month, &mut warnings);
    check_overtime_cells(staff, &row, &mut warnings);
    check_side_restrictions(staff, &row, &mut warnings);
    warnings
}

/// Warns on every maximal workday run over the tolerated cap, and on
/// overuse of the one-day overrun allowance.
fn check_consecutive_runs(
    staff: &Staff,
    row: &[ShiftType],
    settings: &Settings,
    warnings: &mut Vec<Warning>,
) {
    let max = effective_max_consecutive(staff, settings);
    let slack = u32::from(staff.allow_consecutive_plus_one);
    let limit = max + slack;

    let mut overrun_uses = 0;
    let mut start = 0u32;
    let mut length = 0u32;
    for day in 1..=(row.len() as u32 + 1) {
        let working = row
            .get((day - 1) as usize)
            .map_or(false, |s| s.is_workday());
        if working {
            if length == 0 {
                start = day;
            }
            length += 1;
        } else {
            if length > limit {
                warnings.push(Warning::consecutive_overrun(&staff.name, start, length, limit));
            }
            if slack > 0 && length == max + 1 {
                overrun_uses += 1;
            }
            length = 0;
        }
    }

    if overrun_uses > OVERRUN_ALLOWANCE {
        warnings.push(Warning::overrun_budget_exceeded(&staff.name, overrun_uses));
    }
}

/// Warns on night shifts held by ineligible staff or on forbidden days.
fn check_night_cells(staff: &Staff, row: &[ShiftType], month: &Month, warnings: &mut Vec<Warning>) {
    for (idx, &cell) in row.iter().enumerate() {
        if cell != ShiftType::Night {
            continue;
        }
        let day = idx as u32 + 1;
        if staff.kind == StaffKind::Part || staff.night == NightCapability::None {
            warnings.push(Warning::ineligible_night(&staff.name, day));
        } else if staff.night == NightCapability::WeekdayOnly && month.is_weekend_night(day) {
            warnings.push(Warning::night_on_restricted_day(&staff.name, day));
        }
    }
}

/// Warns on night shifts whose following day is not the rest.
fn check_night_rest(staff: &Staff, row: &[ShiftType], warnings: &mut Vec<Warning>) {
    for (idx, &cell) in row.iter().enumerate() {
        if cell != ShiftType::Night {
            continue;
        }
        if let Some(&next) = row.get(idx + 1) {
            if next != ShiftType::NightOff {
                warnings.push(Warning::missing_night_rest(&staff.name, idx as u32 + 1));
            }
        }
    }
}

/// Warns on through shifts held by ineligible staff.
fn check_overtime_cells(staff: &Staff, row: &[ShiftType], warnings: &mut Vec<Warning>) {
    for (idx, &cell) in row.iter().enumerate() {
        if cell == ShiftType::Overtime && (staff.kind == StaffKind::Part || !staff.can_overtime) {
            warnings.push(Warning::ineligible_overtime(&staff.name, idx as u32 + 1));
        }
    }
}

/// Warns on shifts conflicting with early-only or late-only part-timers.
fn check_side_restrictions(staff: &Staff, row: &[ShiftType], warnings: &mut Vec<Warning>) {
    if staff.kind != StaffKind::Part {
        return;
    }
    for (idx, &cell) in row.iter().enumerate() {
        let day = idx as u32 + 1;
        if staff.late_only && matches!(cell, ShiftType::Early | ShiftType::Overtime) {
            warnings.push(Warning::restricted_shift(&staff.name, day, cell, "late"));
        }
        if staff.early_only && matches!(cell, ShiftType::Late | ShiftType::Overtime) {
            warnings.push(Warning::restricted_shift(&staff.name, day, cell, "early"));
        }
    }
}
