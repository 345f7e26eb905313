//! Coverage final-rescue.
//!
//! A last sweep over every (day, checkpoint) still below its recorded
//! floor. In-place through-shift upgrades come first because they cost
//! nobody a day off; then any full-timer still open to work; finally
//! part-timers whose own hours span the checkpoint. Coverage outranks
//! the rest quota here, so a part-timer rescue may breach the day-off
//! floor and leave the shortfall to be warned about later. The sweep
//! itself emits nothing; the coverage phase already reported these days.

use rand::Rng;

use crate::coverage::Checkpoint;
use crate::eligibility::fits_consecutive;
use crate::models::{ShiftType, StaffKind};
use crate::scoring;

use super::{rank, Run};

impl Run<'_> {
    pub(super) fn rescue_coverage<R: Rng>(&mut self, rng: &mut R) {
        for day in 1..=self.days() {
            let floors = self.floors[day as usize];
            for (idx, cp) in Checkpoint::ALL.iter().enumerate() {
                let floor = floors[idx];
                if self.count_cp(day, *cp) >= floor {
                    continue;
                }
                self.upgrade_for_checkpoint(day, *cp, floor, rng);
                self.rescue_add_full_timers(day, *cp, floor, rng);
                self.rescue_add_part_timers(day, *cp, floor);
            }
        }
    }

    /// Adds still-available full-timers with the shift that covers the
    /// short checkpoint.
    fn rescue_add_full_timers<R: Rng>(
        &mut self,
        day: u32,
        checkpoint: Checkpoint,
        floor: u32,
        rng: &mut R,
    ) {
        while self.count_cp(day, checkpoint) < floor {
            let gaps = self.work_gaps();
            let mut candidates = self.day_pool(day);
            rank::sort_soft(&mut candidates, &gaps, rng);

            let mut assigned = false;
            for &i in &candidates {
                if let Some(fit) = self.admit(i, day) {
                    let shift = match checkpoint {
                        Checkpoint::Morning => ShiftType::Early,
                        Checkpoint::Evening => ShiftType::Late,
                        Checkpoint::Noon => self.lighter_day_side(i),
                    };
                    self.assign_workday(i, day, shift, fit);
                    assigned = true;
                    break;
                }
            }
            if !assigned {
                break;
            }
        }
    }

    /// Adds part-timers whose hours span the checkpoint minute, in
    /// roster order. The weekly cap and run cap still hold; the day-off
    /// floor deliberately does not.
    fn rescue_add_part_timers(&mut self, day: u32, checkpoint: Checkpoint, floor: u32) {
        while self.count_cp(day, checkpoint) < floor {
            let mut placed = false;
            for i in 0..self.staff.len() {
                let staff = &self.staff[i];
                if staff.kind != StaffKind::Part
                    || self.cell(i, day) != ShiftType::Off
                    || self.requested(i, day)
                    || !staff.work_span().contains(checkpoint.minute())
                {
                    continue;
                }
                let row = self.row(i);
                if scoring::week_workdays(row, &self.month, day) >= staff.max_days_per_week {
                    continue;
                }
                if !fits_consecutive(row, day, self.max_for(i)) {
                    continue;
                }
                self.set(i, day, ShiftType::Part);
                placed = true;
                break;
            }
            if !placed {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::coverage;
    use crate::generator::generate_with_rng;
    use crate::models::{Settings, ShiftType, Staff};

    #[test]
    fn test_part_timer_pulled_in_for_coverage() {
        // Three full-timers cannot make a four-head morning; the
        // part-timer with spanning hours is the only way up.
        let mut staff: Vec<Staff> = (0..3)
            .map(|n| Staff::full(format!("s{n}"), format!("S{n}")))
            .collect();
        staff.push(
            Staff::part("p", "P")
                .with_hours("07:00", "18:00")
                .with_max_days_per_week(7)
                .with_days_off_target(9),
        );

        let mut rng = StdRng::seed_from_u64(17);
        let result = generate_with_rng(
            &staff,
            2025,
            6,
            &HashMap::new(),
            &Settings::default(),
            &mut rng,
        );

        let part_days = result
            .assignments
            .row("p")
            .unwrap()
            .iter()
            .filter(|&&c| c == ShiftType::Part)
            .count();
        assert!(part_days > 0, "rescue should hand the part-timer shifts");

        // Wherever all four are in, the morning floor is met
        let mut covered = 0;
        for day in 1..=30 {
            if coverage::count_at(&result.assignments, &staff, day, 420) >= 4 {
                covered += 1;
            }
        }
        assert!(covered > 0);
    }
}
