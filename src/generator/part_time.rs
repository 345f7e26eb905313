//! Part-timer placement and rest equalization.
//!
//! Part-timers only ever hold `Part` cells. Staff on a two-day run cap
//! get a rotating work-work-rest pattern, everyone else a randomized
//! walk up to their workday target. A follow-up pass keeps one
//! part-timer from absorbing the rest burden of another.

use rand::Rng;

use crate::eligibility::fits_consecutive;
use crate::models::{ShiftType, StaffKind};
use crate::scoring;

use super::Run;

/// Upper bound on rest-equalization iterations.
const EQUALIZE_ROUNDS: u32 = 20;

impl Run<'_> {
    /// Places part-timer shifts, one staff at a time in roster order.
    pub(super) fn place_part_timers<R: Rng>(&mut self, rng: &mut R) {
        for i in 0..self.staff.len() {
            if self.staff[i].kind != StaffKind::Part {
                continue;
            }
            let max = self.max_for(i);
            if max <= 2 {
                self.place_part_pattern(i, max);
            } else {
                self.place_part_walk(i, max, rng);
            }
        }
    }

    /// Work-work-rest pattern placement for tight run caps.
    ///
    /// Tries the three pattern offsets against a scratch copy of the row
    /// and commits whichever offset yields the most workdays.
    fn place_part_pattern(&mut self, i: usize, max: u32) {
        let days = self.days();
        let mut best: Option<(u32, Vec<ShiftType>)> = None;

        for offset in 0..3u32 {
            let mut row = self.row(i).to_vec();
            for day in 1..=days {
                if (day - 1 + offset) % 3 == 2 {
                    continue; // the rest beat of the pattern
                }
                if self.part_gates(i, &row, day, max) {
                    row[(day - 1) as usize] = ShiftType::Part;
                }
            }
            let count = scoring::workdays(&row);
            if best.as_ref().map_or(true, |(c, _)| count > *c) {
                best = Some((count, row));
            }
        }

        if let Some((_, row)) = best {
            self.table.replace_row(&self.staff[i].id, row);
        }
    }

    /// Randomized-start walk placement for ordinary run caps.
    ///
    /// Walks forward from a random day, wrapping once through the month,
    /// and stops at the workday target. A reverse sweep picks up what
    /// the forward walk could not reach.
    fn place_part_walk<R: Rng>(&mut self, i: usize, max: u32, rng: &mut R) {
        let days = self.days();
        let start = rng.random_range(1..=days);
        let mut row = self.row(i).to_vec();
        let target = scoring::target_workdays(&self.staff[i], &row, days);

        for step in 0..days {
            if scoring::workdays(&row) as i32 >= target {
                break;
            }
            let day = (start - 1 + step) % days + 1;
            if self.part_gates(i, &row, day, max) {
                row[(day - 1) as usize] = ShiftType::Part;
            }
        }

        if (scoring::workdays(&row) as i32) < target {
            for day in (1..=days).rev() {
                if scoring::workdays(&row) as i32 >= target {
                    break;
                }
                if self.part_gates(i, &row, day, max) {
                    row[(day - 1) as usize] = ShiftType::Part;
                }
            }
        }

        self.table.replace_row(&self.staff[i].id, row);
    }

    /// Evens out surplus rest among part-timers.
    ///
    /// Repeatedly takes the part-timer furthest over their day-off
    /// target and tries to hand them one more shift; stops when nobody
    /// is over target or nothing more can be placed.
    pub(super) fn equalize_part_rest(&mut self) {
        for _ in 0..EQUALIZE_ROUNDS {
            let mut pick: Option<(usize, i64)> = None;
            for (i, s) in self.staff.iter().enumerate() {
                if s.kind != StaffKind::Part {
                    continue;
                }
                let surplus =
                    scoring::off_days(self.row(i)) as i64 - s.monthly_days_off_target as i64;
                if surplus > 0 && pick.map_or(true, |(_, best)| surplus > best) {
                    pick = Some((i, surplus));
                }
            }
            let Some((i, _)) = pick else { break };
            if !self.add_one_part_shift(i) {
                break;
            }
        }
    }

    fn add_one_part_shift(&mut self, i: usize) -> bool {
        let max = self.max_for(i);
        let days = self.days();
        let mut row = self.row(i).to_vec();
        for day in 1..=days {
            if self.part_gates(i, &row, day, max) {
                row[(day - 1) as usize] = ShiftType::Part;
                self.table.replace_row(&self.staff[i].id, row);
                return true;
            }
        }
        false
    }

    /// Shared admission gates for one part-timer cell on a scratch row.
    fn part_gates(&self, i: usize, row: &[ShiftType], day: u32, max: u32) -> bool {
        row.get((day - 1) as usize) == Some(&ShiftType::Off)
            && !self.requested(i, day)
            && scoring::week_workdays(row, &self.month, day) < self.staff[i].max_days_per_week
            && fits_consecutive(row, day, max)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::calendar::Month;
    use crate::generator::generate_with_rng;
    use crate::models::{Settings, ShiftType, Staff};
    use crate::scoring;

    fn longest_run(row: &[ShiftType]) -> u32 {
        let mut best = 0;
        let mut current = 0;
        for shift in row {
            if shift.is_workday() {
                current += 1;
                best = best.max(current);
            } else {
                current = 0;
            }
        }
        best
    }

    #[test]
    fn test_two_day_cap_never_runs_three() {
        let staff = vec![Staff::part("p", "P")
            .with_max_consecutive(2)
            .with_max_days_per_week(3)
            .with_days_off_target(10)];
        let mut rng = StdRng::seed_from_u64(3);
        let result = generate_with_rng(
            &staff,
            2025,
            4,
            &HashMap::new(),
            &Settings::default(),
            &mut rng,
        );

        let row = result.assignments.row("p").unwrap();
        assert!(longest_run(row) <= 2);
        assert!(scoring::workdays(row) > 0);
    }

    #[test]
    fn test_weekly_cap_holds() {
        let staff = vec![Staff::part("p", "P").with_max_days_per_week(3)];
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_with_rng(
            &staff,
            2025,
            4,
            &HashMap::new(),
            &Settings::default(),
            &mut rng,
        );

        let month = Month::new(2025, 4).unwrap();
        let row = result.assignments.row("p").unwrap();
        for day in 1..=30 {
            assert!(scoring::week_workdays(row, &month, day) <= 3);
        }
    }

    #[test]
    fn test_walk_stops_at_target() {
        // Generous weekly cap so only the monthly target limits placement
        let staff = vec![Staff::part("p", "P")
            .with_max_days_per_week(7)
            .with_days_off_target(12)];
        let mut rng = StdRng::seed_from_u64(9);
        let result = generate_with_rng(
            &staff,
            2025,
            4,
            &HashMap::new(),
            &Settings::default(),
            &mut rng,
        );

        let row = result.assignments.row("p").unwrap();
        assert_eq!(scoring::workdays(row), 18); // 30 days minus 12 off
    }

    #[test]
    fn test_part_cells_only() {
        let staff = vec![Staff::part("p", "P")];
        let mut rng = StdRng::seed_from_u64(11);
        let result = generate_with_rng(
            &staff,
            2025,
            4,
            &HashMap::new(),
            &Settings::default(),
            &mut rng,
        );

        for &cell in result.assignments.row("p").unwrap() {
            assert!(cell == ShiftType::Part || cell == ShiftType::Off);
        }
    }
}
