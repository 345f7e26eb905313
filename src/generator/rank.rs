//! Candidate orderings used by the placement phases.
//!
//! Every ordering shuffles first and then stable-sorts, so the injected
//! random source decides nothing except ties. Keys are passed as
//! precomputed per-staff slices indexed by roster position.

use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::scoring::OVERTIME_MONTHLY_CAP;

/// Soft fairness order: staff still short of their workday target come
/// first, larger shortfall first within each class.
pub(crate) fn sort_soft<R: Rng + ?Sized>(candidates: &mut [usize], gaps: &[i32], rng: &mut R) {
    candidates.shuffle(rng);
    candidates.sort_by_key(|&i| (gaps[i] <= 0, Reverse(gaps[i])));
}

/// Soft fairness order with a per-shift balance tiebreak: among equal
/// gaps, staff holding fewer of the shift being placed come first.
pub(crate) fn sort_soft_balanced<R: Rng + ?Sized>(
    candidates: &mut [usize],
    gaps: &[i32],
    shift_counts: &[u32],
    rng: &mut R,
) {
    candidates.shuffle(rng);
    candidates.sort_by_key(|&i| (gaps[i] <= 0, Reverse(gaps[i]), shift_counts[i]));
}

/// Through-shift order: drops staff at the hard monthly cap, then ranks
/// by fewest through shifts so far, largest workday shortfall next.
pub(crate) fn sort_for_overtime<R: Rng + ?Sized>(
    candidates: &mut Vec<usize>,
    overtime_counts: &[u32],
    gaps: &[i32],
    rng: &mut R,
) {
    candidates.retain(|&i| overtime_counts[i] < OVERTIME_MONTHLY_CAP);
    candidates.shuffle(rng);
    candidates.sort_by_key(|&i| (overtime_counts[i], Reverse(gaps[i])));
}
