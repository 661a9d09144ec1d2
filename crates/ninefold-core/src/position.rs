//! Board position types.

use std::fmt::{self, Display};

/// A board position identified by row and column, both in 0-8.
///
/// Positions order row-major: all of row 0 left to right, then row 1, and so
/// on. This is the enumeration order of [`Position::ALL`] and the order the
/// solver visits empty cells in.
///
/// `Display` uses the conventional 1-based Sudoku notation, e.g. `R5C7` for
/// row 4, column 6.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 6);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 6);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.to_string(), "R5C7");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[10], Position::new(1, 1));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from a row and column.
    ///
    /// Coordinates are expected to be range-checked by the caller; the input
    /// layer is responsible for rejecting anything outside 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 box containing this position (0-8, left
    /// to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the top-left corner of the 3x3 box containing this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(4, 7).box_origin(), Position::new(3, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: (self.row / 3) * 3,
            col: (self.col / 3) * 3,
        }
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_board_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 2).box_index(), 0);
        assert_eq!(Position::new(0, 3).box_index(), 1);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
        assert_eq!(Position::new(5, 1).box_origin(), Position::new(3, 0));
        assert_eq!(Position::new(8, 8).box_origin(), Position::new(6, 6));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "R1C1");
        assert_eq!(Position::new(8, 8).to_string(), "R9C9");
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
