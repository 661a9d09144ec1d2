//! A single board cell.

use ninefold_core::Digit;

/// One cell of the player-visible board.
///
/// A cell carries its digit (or emptiness), whether it is a clue, and a
/// transient error flag. The clue flag is decided once, when the board is
/// built from a generated problem, and never changes afterwards. The error
/// flag is owned by the scan pass: it is recomputed on every
/// [`Game::scan`](crate::Game::scan) and has no meaning between edits and
/// the next scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    value: Option<Digit>,
    is_clue: bool,
    has_error: bool,
}

impl Cell {
    /// Creates an empty, editable cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            is_clue: false,
            has_error: false,
        }
    }

    /// Creates a clue cell holding `digit`.
    #[must_use]
    pub const fn clue(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            is_clue: true,
            has_error: false,
        }
    }

    /// Returns the digit in this cell, or `None` if it is empty.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns `true` if this cell is an immutable clue.
    #[must_use]
    pub const fn is_clue(&self) -> bool {
        self.is_clue
    }

    /// Returns the error flag computed by the most recent scan.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.has_error
    }

    /// Returns `true` if the cell holds no digit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub(crate) fn set_value(&mut self, value: Option<Digit>) {
        debug_assert!(!self.is_clue);
        self.value = value;
    }

    pub(crate) fn set_error(&mut self, has_error: bool) {
        self.has_error = has_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let cell = Cell::empty();
        assert!(cell.is_empty());
        assert!(!cell.is_clue());
        assert!(!cell.has_error());
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_clue_cell() {
        let cell = Cell::clue(Digit::D4);
        assert_eq!(cell.value(), Some(Digit::D4));
        assert!(cell.is_clue());
        assert!(!cell.is_empty());
    }
}
