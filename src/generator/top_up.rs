//! Workday-gap top-up for full-timers.
//!
//! After coverage placement some full-timers still sit short of their
//! monthly workday target. Each of them is topped up one day at a time,
//! preferring days where the extra head also closes a checkpoint
//! shortfall and falling back to the thinnest-staffed day otherwise.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::coverage::WEEKDAY_REQUIRED;
use crate::models::{ShiftType, StaffKind};
use crate::scoring;

use super::Run;

impl Run<'_> {
    pub(super) fn top_up_workdays<R: Rng>(&mut self, rng: &mut R) {
        for i in 0..self.staff.len() {
            if self.staff[i].kind != StaffKind::Full {
                continue;
            }
            while self.top_up_once(i, rng) {}
        }
    }

    /// Places one top-up shift for a staff; false when done or stuck.
    fn top_up_once<R: Rng>(&mut self, i: usize, rng: &mut R) -> bool {
        if scoring::work_gap(&self.staff[i], self.row(i), self.days()) <= 0 {
            return false;
        }
        if !self.off_floor_open(i) {
            return false;
        }

        let candidates: Vec<u32> = (1..=self.days())
            .filter(|&d| {
                self.cell(i, d) == ShiftType::Off
                    && !self.requested(i, d)
                    && self.admit(i, d).is_some()
            })
            .collect();
        if candidates.is_empty() {
            return false;
        }

        // Prefer a day whose checkpoints are still short somewhere
        let mut best: Option<(u32, u32)> = None;
        for &d in &candidates {
            let counts = self.counts(d);
            let shortfall: u32 = counts
                .iter()
                .map(|&c| WEEKDAY_REQUIRED.saturating_sub(c))
                .sum();
            if shortfall > 0 && best.map_or(true, |(_, s)| shortfall > s) {
                best = Some((d, shortfall));
            }
        }

        let (day, shift) = if let Some((d, _)) = best {
            let counts = self.counts(d);
            let shift = if counts[2] < WEEKDAY_REQUIRED {
                ShiftType::Late
            } else if counts[0] < WEEKDAY_REQUIRED {
                ShiftType::Early
            } else {
                self.lighter_day_side(i)
            };
            (d, shift)
        } else {
            // Nothing is short: take the thinnest day, random on ties
            let totals: Vec<(u32, u32)> = candidates
                .iter()
                .map(|&d| (d, self.counts(d).iter().sum()))
                .collect();
            let Some(min) = totals.iter().map(|&(_, t)| t).min() else {
                return false;
            };
            let tied: Vec<u32> = totals
                .iter()
                .filter(|&&(_, t)| t == min)
                .map(|&(d, _)| d)
                .collect();
            let Some(&d) = tied.choose(rng) else {
                return false;
            };
            (d, self.lighter_day_side(i))
        };

        match self.admit(i, day) {
            Some(fit) => {
                self.assign_workday(i, day, shift, fit);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::generator::generate_with_rng;
    use crate::models::{Settings, Staff};
    use crate::scoring;

    #[test]
    fn test_top_up_reaches_target_or_floor() {
        let staff: Vec<Staff> = (0..8)
            .map(|n| Staff::full(format!("s{n}"), format!("S{n}")).with_overtime(n % 2 == 0))
            .collect();
        let mut rng = StdRng::seed_from_u64(13);
        let result = generate_with_rng(
            &staff,
            2025,
            6,
            &HashMap::new(),
            &Settings::default(),
            &mut rng,
        );

        // Eight plain full-timers against a four-head demand leave slack,
        // so everyone should land exactly on target: 30 - 9 off.
        for s in &staff {
            let row = result.assignments.row(&s.id).unwrap();
            assert_eq!(
                scoring::workdays(row),
                21,
                "{} should reach the workday target",
                s.name
            );
        }
    }
}
