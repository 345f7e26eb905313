//! The multi-phase roster generator.
//!
//! A month is filled by a fixed sequence of greedy passes over one shared
//! assignment table, each pass narrowing a different axis of the problem:
//!
//! 1. blank table, requested days off recorded
//! 2. night shifts with their morning-after rests
//! 3. part-timer placement, then part-timer rest equalization
//! 4. per-day checkpoint coverage with full-timer day shifts
//! 5. workday-gap top-up, coverage rescue, early/late balancing
//! 6. day-off shortfall warnings
//! 7. final validation
//!
//! No pass backtracks. Conflicts the passes cannot reconcile are
//! surfaced as warnings on the result, never as errors. All randomized
//! tie-breaking consumes the caller-supplied random source, so a fixed
//! seed reproduces the schedule exactly.
//!
//! # Reference
//! Burke et al. (2004), "The State of the Art of Nurse Rostering"

mod balance;
mod day_cover;
mod nights;
mod part_time;
mod rank;
mod rescue;
mod top_up;

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::coverage::{self, Checkpoint, WEEKDAY_REQUIRED};
use crate::eligibility::{can_work_on, effective_max_consecutive, OverrunBudget, RunFit};
use crate::models::{Settings, ShiftTable, ShiftType, Staff, StaffKind, Warning};
use crate::scoring;
use crate::validation;

/// Requested days off, staff id to 1-based days of month.
pub type OffRequests = HashMap<String, HashSet<u32>>;

/// A generated schedule with every shortcoming it could not avoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResult {
    /// The completed assignment table; every cell is populated.
    pub assignments: ShiftTable,
    /// Everything the schedule fails to satisfy, in emission order.
    pub warnings: Vec<Warning>,
}

/// Generates a monthly schedule using the thread-local random source.
pub fn generate(
    staff: &[Staff],
    year: i32,
    month: u32,
    requests: &OffRequests,
    settings: &Settings,
) -> GenerateResult {
    generate_with_rng(staff, year, month, requests, settings, &mut rand::rng())
}

/// Generates a monthly schedule with a caller-supplied random source.
///
/// Two calls with identical inputs and identically seeded sources
/// produce identical assignments and warnings.
pub fn generate_with_rng<R: Rng>(
    staff: &[Staff],
    year: i32,
    month: u32,
    requests: &OffRequests,
    settings: &Settings,
    rng: &mut R,
) -> GenerateResult {
    let Some(month) = Month::new(year, month) else {
        return GenerateResult {
            assignments: ShiftTable::default(),
            warnings: Vec::new(),
        };
    };
    if staff.is_empty() {
        // Nobody to place means nothing to warn about either
        return GenerateResult {
            assignments: ShiftTable::blank(staff, month.days()),
            warnings: Vec::new(),
        };
    }

    let mut run = Run::new(staff, month, requests, settings);
    run.place_nights(rng);
    run.place_part_timers(rng);
    run.equalize_part_rest();
    run.cover_day_shifts(rng);
    run.top_up_workdays(rng);
    run.rescue_coverage(rng);
    run.balance_early_late();
    run.warn_off_day_shortfalls();

    let mut warnings = run.warnings;
    warnings.extend(validation::validate(
        staff,
        &run.table,
        month.year(),
        month.month(),
        settings,
    ));

    GenerateResult {
        assignments: run.table,
        warnings,
    }
}

/// Mutable state of one generation run.
///
/// Owned exclusively for the duration of the run; the table leaves as
/// the result, everything else is discarded.
struct Run<'a> {
    staff: &'a [Staff],
    month: Month,
    settings: &'a Settings,
    /// Sanitized requested-off sets, aligned with the roster by index.
    requests: Vec<HashSet<u32>>,
    table: ShiftTable,
    warnings: Vec<Warning>,
    /// Coverage shortfalls already reported, keyed by (day, checkpoint).
    warned_coverage: HashSet<(u32, u8)>,
    budget: OverrunBudget,
    sunday_relaxed_used: u32,
    /// Effective per-day checkpoint floors, recorded by the coverage
    /// phase for the rescue phase to reuse. Indexed by day.
    floors: Vec<[u32; 3]>,
}

impl<'a> Run<'a> {
    fn new(
        staff: &'a [Staff],
        month: Month,
        requests: &OffRequests,
        settings: &'a Settings,
    ) -> Self {
        let days = month.days();
        // Unknown staff ids drop out here; out-of-range days are filtered
        let requests = staff
            .iter()
            .map(|s| {
                requests
                    .get(&s.id)
                    .map(|set| {
                        set.iter()
                            .copied()
                            .filter(|&d| d >= 1 && d <= days)
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();

        Self {
            staff,
            month,
            settings,
            requests,
            table: ShiftTable::blank(staff, days),
            warnings: Vec::new(),
            warned_coverage: HashSet::new(),
            budget: OverrunBudget::new(),
            sunday_relaxed_used: 0,
            floors: vec![[WEEKDAY_REQUIRED; 3]; days as usize + 1],
        }
    }

    fn days(&self) -> u32 {
        self.month.days()
    }

    fn row(&self, i: usize) -> &[ShiftType] {
        self.table.row(&self.staff[i].id).unwrap_or(&[])
    }

    fn cell(&self, i: usize, day: u32) -> ShiftType {
        self.table.get(&self.staff[i].id, day)
    }

    fn set(&mut self, i: usize, day: u32, shift: ShiftType) {
        self.table.set(&self.staff[i].id, day, shift);
    }

    fn requested(&self, i: usize, day: u32) -> bool {
        self.requests[i].contains(&day)
    }

    fn max_for(&self, i: usize) -> u32 {
        effective_max_consecutive(&self.staff[i], self.settings)
    }

    fn counts(&self, day: u32) -> [u32; 3] {
        coverage::checkpoint_counts(&self.table, self.staff, day)
    }

    /// Workday gap per staff, aligned with the roster by index.
    fn work_gaps(&self) -> Vec<i32> {
        self.staff
            .iter()
            .enumerate()
            .map(|(i, s)| scoring::work_gap(s, self.row(i), self.days()))
            .collect()
    }

    /// Count of one shift value per staff, aligned with the roster.
    fn shift_counts(&self, shift: ShiftType) -> Vec<u32> {
        (0..self.staff.len())
            .map(|i| scoring::count_shift(self.row(i), shift))
            .collect()
    }

    /// Whether the staff can still give up a day off.
    ///
    /// A staff whose off-day count has already come down to their target
    /// is closed to further additions; only upgrades of existing work
    /// cells remain possible.
    fn off_floor_open(&self, i: usize) -> bool {
        scoring::off_days(self.row(i)) > self.staff[i].monthly_days_off_target
    }

    /// Run-cap admission for adding a workday on `day`.
    fn admit(&self, i: usize, day: u32) -> Option<RunFit> {
        can_work_on(
            &self.staff[i],
            self.row(i),
            day,
            self.max_for(i),
            &self.budget,
        )
    }

    /// Writes a workday cell, consuming the overrun allowance when the
    /// admission said this placement needs it.
    fn assign_workday(&mut self, i: usize, day: u32, shift: ShiftType, fit: RunFit) {
        self.set(i, day, shift);
        if fit == RunFit::PlusOne {
            self.budget.mark(&self.staff[i].id);
        }
    }

    /// Whether a full-timer is available for a new day shift on `day`.
    fn available_for_work(&self, i: usize, day: u32) -> bool {
        self.staff[i].kind == StaffKind::Full
            && self.cell(i, day) == ShiftType::Off
            && !self.requested(i, day)
            && self.off_floor_open(i)
            && self.admit(i, day).is_some()
    }

    /// Full-timers available for a new day shift on `day`, roster order.
    fn day_pool(&self, day: u32) -> Vec<usize> {
        (0..self.staff.len())
            .filter(|&i| self.available_for_work(i, day))
            .collect()
    }

    /// Reports a checkpoint shortfall once per (day, checkpoint).
    fn warn_coverage(&mut self, day: u32, checkpoint: Checkpoint, count: u32, required: u32) {
        let key = (day, checkpoint as u8);
        if self.warned_coverage.insert(key) {
            self.warnings.push(Warning::coverage_shortfall(
                day,
                checkpoint.label(),
                count,
                required,
            ));
        }
    }

    /// Emits one warning per staff finishing short of their day-off
    /// quota. Finishing over quota is fine.
    fn warn_off_day_shortfalls(&mut self) {
        for (i, s) in self.staff.iter().enumerate() {
            let off = scoring::off_days(self.row(i));
            if off < s.monthly_days_off_target {
                self.warnings
                    .push(Warning::off_day_shortfall(&s.name, off, s.monthly_days_off_target));
            }
        }
    }
}
