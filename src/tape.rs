//! The bidirectional Feels memory tape.

use std::collections::HashMap;

use crate::Cell;

/// An infinite tape of integer cells stretching in both directions from
/// offset 0. Implemented as two sparse maps, one for non-negative offsets
/// and one for negative offsets keyed by absolute magnitude; offset 0 lives
/// in the non-negative map. Reading a never-written offset yields 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tape {
    non_negative: HashMap<u64, Cell>,
    negative: HashMap<u64, Cell>,
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the cell at a signed offset, defaulting to 0.
    pub fn get(&self, at: i64) -> Cell {
        let cell = if at >= 0 {
            self.non_negative.get(&(at as u64))
        } else {
            self.negative.get(&at.unsigned_abs())
        };
        cell.copied().unwrap_or(0)
    }

    /// Write the cell at a signed offset.
    pub fn set(&mut self, at: i64, value: Cell) {
        if at >= 0 {
            self.non_negative.insert(at as u64, value);
        } else {
            self.negative.insert(at.unsigned_abs(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tape;

    #[test]
    fn test_default_zero() {
        let tape = Tape::new();
        assert_eq!(tape.get(0), 0);
        assert_eq!(tape.get(123_456), 0);
        assert_eq!(tape.get(-123_456), 0);
        assert_eq!(tape.get(i64::MIN), 0);
        assert_eq!(tape.get(i64::MAX), 0);
    }

    #[test]
    fn test_both_directions() {
        let mut tape = Tape::new();
        tape.set(0, 10);
        tape.set(3, 13);
        tape.set(-3, 7);
        assert_eq!(tape.get(0), 10);
        assert_eq!(tape.get(3), 13);
        assert_eq!(tape.get(-3), 7);
        // -3 and 3 are distinct cells despite the shared map key magnitude.
        tape.set(3, 99);
        assert_eq!(tape.get(-3), 7);
    }

    #[test]
    fn test_overwrite() {
        let mut tape = Tape::new();
        tape.set(-1, 5);
        tape.set(-1, -5);
        assert_eq!(tape.get(-1), -5);
    }
}
