//! Early/late balancing.
//!
//! Full-timers whose early and late counts have drifted more than two
//! apart get half the difference swapped from the heavy side to the
//! light one. A swap only stands if the day keeps its morning and
//! evening headcounts; otherwise it is reverted on the spot.

use crate::coverage::WEEKDAY_REQUIRED;
use crate::models::{ShiftType, StaffKind};
use crate::scoring;

use super::Run;

/// Largest tolerated early/late count difference.
const BALANCE_TOLERANCE: i32 = 2;

impl Run<'_> {
    pub(super) fn balance_early_late(&mut self) {
        for i in 0..self.staff.len() {
            if self.staff[i].kind != StaffKind::Full {
                continue;
            }
            let row = self.row(i);
            let diff = scoring::count_shift(row, ShiftType::Early) as i32
                - scoring::count_shift(row, ShiftType::Late) as i32;
            if diff.abs() <= BALANCE_TOLERANCE {
                continue;
            }

            let (from, to) = if diff > 0 {
                (ShiftType::Early, ShiftType::Late)
            } else {
                (ShiftType::Late, ShiftType::Early)
            };
            let want = (diff.abs() / 2) as u32;

            let mut done = 0;
            for day in 1..=self.days() {
                if done == want {
                    break;
                }
                if self.cell(i, day) != from {
                    continue;
                }
                self.set(i, day, to);
                let counts = self.counts(day);
                if counts[0] < WEEKDAY_REQUIRED || counts[2] < WEEKDAY_REQUIRED {
                    self.set(i, day, from); // would break the day, revert
                } else {
                    done += 1;
                }
            }
        }
    }
}
