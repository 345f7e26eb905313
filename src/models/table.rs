//! Assignment table (solution) model.
//!
//! The table maps every (staff, day) pair to exactly one shift value.
//! Days are 1-based; a blank table is all `Off`, and every later phase
//! only ever rewrites cells, so the table is total at all times. One
//! generation run owns the table exclusively and hands it to the caller
//! at completion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ShiftType, Staff};

/// A complete month of shift assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftTable {
    days: u32,
    rows: HashMap<String, Vec<ShiftType>>,
}

impl ShiftTable {
    /// Creates a blank table (every cell `Off`) for the given roster.
    pub fn blank(staff: &[Staff], days: u32) -> Self {
        let rows = staff
            .iter()
            .map(|s| (s.id.clone(), vec![ShiftType::Off; days as usize]))
            .collect();
        Self { days, rows }
    }

    /// Number of days in the covered month.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Number of staff rows.
    pub fn staff_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell for a staff on a 1-based day.
    ///
    /// Unknown staff and out-of-range days read as `Off`.
    pub fn get(&self, staff_id: &str, day: u32) -> ShiftType {
        if day == 0 || day > self.days {
            return ShiftType::Off;
        }
        self.rows
            .get(staff_id)
            .and_then(|row| row.get((day - 1) as usize))
            .copied()
            .unwrap_or(ShiftType::Off)
    }

    /// Writes a cell. Unknown staff and out-of-range days are ignored.
    pub fn set(&mut self, staff_id: &str, day: u32, shift: ShiftType) {
        if day == 0 || day > self.days {
            return;
        }
        if let Some(row) = self.rows.get_mut(staff_id) {
            if let Some(cell) = row.get_mut((day - 1) as usize) {
                *cell = shift;
            }
        }
    }

    /// The full row for a staff, indexed by day minus one.
    pub fn row(&self, staff_id: &str) -> Option<&[ShiftType]> {
        self.rows.get(staff_id).map(|r| r.as_slice())
    }

    /// Replaces a staff's entire row. Ignored unless the length matches.
    pub fn replace_row(&mut self, staff_id: &str, row: Vec<ShiftType>) {
        if row.len() == self.days as usize {
            if let Some(existing) = self.rows.get_mut(staff_id) {
                *existing = row;
            }
        }
    }

    /// Iterates over (staff_id, row) pairs in arbitrary order.
    ///
    /// Callers that need a deterministic order should drive iteration
    /// from the roster slice instead.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[ShiftType])> {
        self.rows.iter().map(|(id, row)| (id.as_str(), row.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Staff> {
        vec![Staff::full("s1", "Sato"), Staff::part("p1", "Kimura")]
    }

    #[test]
    fn test_blank_is_all_off() {
        let t = ShiftTable::blank(&roster(), 30);
        assert_eq!(t.days(), 30);
        assert_eq!(t.staff_count(), 2);
        for day in 1..=30 {
            assert_eq!(t.get("s1", day), ShiftType::Off);
            assert_eq!(t.get("p1", day), ShiftType::Off);
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut t = ShiftTable::blank(&roster(), 30);
        t.set("s1", 5, ShiftType::Night);
        t.set("s1", 6, ShiftType::NightOff);
        assert_eq!(t.get("s1", 5), ShiftType::Night);
        assert_eq!(t.get("s1", 6), ShiftType::NightOff);
        assert_eq!(t.get("s1", 7), ShiftType::Off);
    }

    #[test]
    fn test_out_of_range_reads_off() {
        let mut t = ShiftTable::blank(&roster(), 30);
        assert_eq!(t.get("s1", 0), ShiftType::Off);
        assert_eq!(t.get("s1", 31), ShiftType::Off);
        assert_eq!(t.get("nobody", 1), ShiftType::Off);

        // Writes outside the table are dropped
        t.set("s1", 31, ShiftType::Early);
        t.set("nobody", 1, ShiftType::Early);
        assert_eq!(t.get("s1", 31), ShiftType::Off);
        assert_eq!(t.get("nobody", 1), ShiftType::Off);
    }

    #[test]
    fn test_replace_row_length_guard() {
        let mut t = ShiftTable::blank(&roster(), 3);
        t.replace_row("s1", vec![ShiftType::Early; 3]);
        assert_eq!(t.get("s1", 2), ShiftType::Early);

        // Wrong length is ignored
        t.replace_row("s1", vec![ShiftType::Late; 2]);
        assert_eq!(t.get("s1", 2), ShiftType::Early);
    }
}
