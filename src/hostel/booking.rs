use crate::error::{Error, Result};
use crate::parser::Slot;

/// The laundry slot board: booked `[start, end)` hour intervals, kept in
/// insertion order and pairwise disjoint.
#[derive(Debug, Clone)]
pub struct SlotBoard {
    slots: Vec<Slot>,
}

impl SlotBoard {
    pub fn new(seed: Vec<Slot>) -> Self {
        SlotBoard { slots: seed }
    }

    /// Books `[start, end)` if the hours are sane and the interval touches no
    /// existing booking. The board is untouched on failure.
    pub fn book(&mut self, start: u32, end: u32) -> Result<()> {
        if start >= end {
            return Err(Error::InvalidInterval { start, end });
        }
        let clash = self
            .slots
            .iter()
            .any(|s| !(end <= s.start || start >= s.end));
        if clash {
            return Err(Error::SlotConflict { start, end });
        }
        self.slots.push(Slot { start, end });
        Ok(())
    }

    /// Booked slots in insertion order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::seed_laundry_slots;

    fn seeded_board() -> SlotBoard {
        SlotBoard::new(seed_laundry_slots().unwrap())
    }

    #[test]
    fn test_identical_slot_conflicts() {
        let mut board = seeded_board();
        let err = board.book(10, 11).unwrap_err();
        assert!(matches!(err, Error::SlotConflict { start: 10, end: 11 }));
        assert_eq!(board.slots().len(), 3);
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        let mut board = seeded_board();
        assert!(board.book(8, 10).is_err()); // overlaps [9,10)
        assert!(board.book(11, 14).is_err()); // overlaps [11,12)
        assert!(board.book(8, 13).is_err()); // spans everything
        assert_eq!(board.slots().len(), 3);
    }

    #[test]
    fn test_disjoint_slot_books_and_is_retrievable() {
        let mut board = seeded_board();
        board.book(12, 13).unwrap();
        assert_eq!(board.slots().last(), Some(&Slot { start: 12, end: 13 }));

        // touching endpoints do not overlap in half-open intervals
        board.book(8, 9).unwrap();
        assert_eq!(board.slots().len(), 5);
    }

    #[test]
    fn test_degenerate_interval_rejected() {
        let mut board = seeded_board();
        assert!(matches!(
            board.book(13, 13),
            Err(Error::InvalidInterval { .. })
        ));
        assert!(matches!(
            board.book(14, 13),
            Err(Error::InvalidInterval { .. })
        ));
    }
}
