//! Night placement.
//!
//! Nights go in first: they pin two cells at once (the shift and the
//! morning-after rest) and have the narrowest candidate pool, so every
//! later phase works around them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::eligibility::can_assign_night;
use crate::models::{ShiftType, Warning};
use crate::scoring;

use super::Run;

impl Run<'_> {
    /// Fills each day's night quota and forces the morning-after rest.
    ///
    /// Candidates are ranked by fewest nights this month, fewest
    /// workdays next; the shuffle ahead of the sort spreads ties fairly
    /// across the roster. A day with an unfillable quota gets a warning
    /// per missing head. The cell after the rest is checked free at
    /// admission but left for later phases to use.
    pub(super) fn place_nights<R: Rng>(&mut self, rng: &mut R) {
        for day in 1..=self.days() {
            let required = if self.month.is_sunday(day) {
                self.settings.sunday_night_required
            } else {
                self.settings.night_required
            };

            for _ in 0..required {
                let mut candidates: Vec<usize> = (0..self.staff.len())
                    .filter(|&i| {
                        !self.requested(i, day)
                            && can_assign_night(
                                &self.staff[i],
                                self.row(i),
                                day,
                                &self.month,
                                self.max_for(i),
                            )
                    })
                    .collect();

                if candidates.is_empty() {
                    self.warnings.push(Warning::night_unfilled(day));
                    continue;
                }

                let night_counts = self.shift_counts(ShiftType::Night);
                let work_counts: Vec<u32> =
                    (0..self.staff.len()).map(|i| scoring::workdays(self.row(i))).collect();
                candidates.shuffle(rng);
                candidates.sort_by_key(|&i| (night_counts[i], work_counts[i]));

                let pick = candidates[0];
                self.set(pick, day, ShiftType::Night);
                if day + 1 <= self.days() {
                    self.set(pick, day + 1, ShiftType::NightOff);
                }
            }
        }
    }
}
