//! The 9x9 digit matrix and the constraint validator.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9x9 grid of optional digits.
///
/// This is the value-only board representation: the generator seeds clues
/// into it, the solver completes it, and the game session projects its live
/// board into one for rule checks. Cells are indexed by [`Position`].
///
/// The uniqueness rule of Sudoku is encoded in exactly one place,
/// [`DigitMatrix::is_legal`]; every component that needs a legality decision
/// calls it rather than re-implementing the rule.
///
/// # String format
///
/// `FromStr` and `Display` round-trip an 81-character row-major string where
/// `1`-`9` are filled cells and `.` is empty (`_` and `0` are also accepted
/// on input, and whitespace is ignored):
///
/// ```
/// use ninefold_core::DigitMatrix;
///
/// let matrix: DigitMatrix = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(matrix.filled_count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitMatrix {
    cells: [Option<Digit>; 81],
}

impl DigitMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Checks whether `digit` may be placed at `pos` under the row, column,
    /// and 3x3 box uniqueness rule.
    ///
    /// Returns `false` if `digit` already occurs at any *other* cell of the
    /// same row, column, or box. The target cell itself is excluded, so a
    /// cell that already holds `digit` is legal against its own value.
    ///
    /// This is the single source of truth for legality: the clue seeder, the
    /// backtracking solver, and the game-session error scan all route their
    /// rule checks through this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitMatrix, Position};
    ///
    /// let matrix: DigitMatrix = format!("53..7....{}", ".".repeat(72))
    ///     .parse()
    ///     .unwrap();
    ///
    /// assert!(!matrix.is_legal(Position::new(0, 2), Digit::D5)); // row conflict
    /// assert!(matrix.is_legal(Position::new(0, 2), Digit::D4));
    /// ```
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        let digit = Some(digit);

        for col in 0..9 {
            let other = Position::new(pos.row(), col);
            if other != pos && self.get(other) == digit {
                return false;
            }
        }

        for row in 0..9 {
            let other = Position::new(row, pos.col());
            if other != pos && self.get(other) == digit {
                return false;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row()..origin.row() + 3 {
            for col in origin.col()..origin.col() + 3 {
                let other = Position::new(row, col);
                if other != pos && self.get(other) == digit {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the positions of empty cells in row-major
    /// order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_none())
    }

    /// Returns `true` if the matrix is a complete valid solution: every cell
    /// is filled and legal against its peers, which makes every row, column,
    /// and box a permutation of 1-9.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL.into_iter().all(|pos| {
            self.get(pos)
                .is_some_and(|digit| self.is_legal(pos, digit))
        })
    }
}

impl Default for DigitMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitMatrix {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitMatrix {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// Error returned when parsing a [`DigitMatrix`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseMatrixError {
    /// The string contained a character that is neither a digit, an
    /// empty-cell marker, nor whitespace.
    #[display("invalid character {character:?} in matrix string")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, got {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for DigitMatrix {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut matrix = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => Some(Digit::ALL[character as usize - '1' as usize]),
                _ => return Err(ParseMatrixError::InvalidCharacter { character }),
            };
            if count < 81 {
                matrix.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseMatrixError::WrongCellCount { count });
        }
        Ok(matrix)
    }
}

impl Display for DigitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn matrix(s: &str) -> DigitMatrix {
        s.parse().expect("valid matrix string")
    }

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_row_conflict() {
        let m = matrix(&format!("53..7....{}", ".".repeat(72)));
        assert!(!m.is_legal(Position::new(0, 2), Digit::D5));
        assert!(!m.is_legal(Position::new(0, 2), Digit::D3));
        assert!(!m.is_legal(Position::new(0, 2), Digit::D7));
        assert!(m.is_legal(Position::new(0, 2), Digit::D4));
    }

    #[test]
    fn test_column_conflict() {
        let mut m = DigitMatrix::new();
        m.set(Position::new(7, 4), Some(Digit::D6));
        assert!(!m.is_legal(Position::new(1, 4), Digit::D6));
        assert!(m.is_legal(Position::new(1, 4), Digit::D5));
        assert!(m.is_legal(Position::new(1, 3), Digit::D6));
    }

    #[test]
    fn test_box_conflict() {
        let mut m = DigitMatrix::new();
        m.set(Position::new(4, 4), Some(Digit::D9));
        // Same box, different row and column
        assert!(!m.is_legal(Position::new(3, 5), Digit::D9));
        // Adjacent box
        assert!(m.is_legal(Position::new(3, 6), Digit::D9));
    }

    #[test]
    fn test_cell_is_legal_against_its_own_value() {
        let mut m = DigitMatrix::new();
        m.set(Position::new(2, 2), Some(Digit::D8));
        assert!(m.is_legal(Position::new(2, 2), Digit::D8));
        // A second 8 in the same box is still rejected
        assert!(!m.is_legal(Position::new(1, 1), Digit::D8));
    }

    #[test]
    fn test_is_solved_on_complete_solution() {
        let m = matrix(SOLVED);
        assert!(m.is_complete());
        assert!(m.is_solved());
        assert_eq!(m.filled_count(), 81);
        assert_eq!(m.empty_positions().count(), 0);
    }

    #[test]
    fn test_is_solved_rejects_duplicate() {
        let mut m = matrix(SOLVED);
        // Duplicate the first cell's digit into its row
        let first = m.get(Position::new(0, 0));
        m.set(Position::new(0, 5), first);
        assert!(m.is_complete());
        assert!(!m.is_solved());
    }

    #[test]
    fn test_incomplete_matrix_is_not_solved() {
        let mut m = matrix(SOLVED);
        m.set(Position::new(4, 4), None);
        assert!(!m.is_complete());
        assert!(!m.is_solved());
        assert_eq!(m.empty_positions().collect::<Vec<_>>(), vec![Position::new(4, 4)]);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let dots = matrix(&".".repeat(81));
        let underscores = matrix(&"_".repeat(81));
        let zeros = matrix(&"0".repeat(81));
        assert_eq!(dots, underscores);
        assert_eq!(dots, zeros);
        assert_eq!(dots.filled_count(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitMatrix>(),
            Err(ParseMatrixError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            ".".repeat(80).parse::<DigitMatrix>(),
            Err(ParseMatrixError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitMatrix>(),
            Err(ParseMatrixError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let m = matrix(SOLVED);
        assert_eq!(m.to_string(), SOLVED);
        assert_eq!(m.to_string().parse::<DigitMatrix>().unwrap(), m);

        let partial = matrix(&format!("53..7....{}", ".".repeat(72)));
        assert_eq!(partial.to_string().parse::<DigitMatrix>().unwrap(), partial);
    }

    fn transpose(m: &DigitMatrix) -> DigitMatrix {
        let mut out = DigitMatrix::new();
        for pos in Position::ALL {
            out.set(Position::new(pos.col(), pos.row()), m.get(pos));
        }
        out
    }

    proptest! {
        // Transposition maps rows to columns and preserves the box tiling,
        // so legality must be invariant under it.
        #[test]
        fn prop_is_legal_transpose_symmetry(
            cells in proptest::collection::vec(0..=9_u8, 81),
            row in 0..9_u8,
            col in 0..9_u8,
            value in 1..=9_u8,
        ) {
            let mut m = DigitMatrix::new();
            for (i, &v) in cells.iter().enumerate() {
                m.cells[i] = Digit::try_from(v).ok();
            }
            let digit = Digit::try_from(value).unwrap();
            let pos = Position::new(row, col);
            let mirrored = Position::new(col, row);
            prop_assert_eq!(
                m.is_legal(pos, digit),
                transpose(&m).is_legal(mirrored, digit)
            );
        }

        // A matrix that passes is_solved has the permutation property in
        // every row (columns and boxes follow by symmetry of the rule).
        #[test]
        fn prop_solved_rows_are_permutations(row in 0..9_u8) {
            let m: DigitMatrix = SOLVED.parse().unwrap();
            let mut seen = [false; 9];
            for col in 0..9 {
                let digit = m.get(Position::new(row, col)).unwrap();
                seen[usize::from(digit.value()) - 1] = true;
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }
}
