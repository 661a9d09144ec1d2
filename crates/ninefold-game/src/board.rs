//! The player-visible board.

use std::ops::Index;

use ninefold_core::{DigitMatrix, Position};

use crate::Cell;

/// The 81-cell board the player sees and edits.
///
/// The board is pure storage: it enforces no rules itself. Editing policy
/// (clue immutability) lives in [`Game`](crate::Game), and legality checks go
/// through [`DigitMatrix::is_legal`] via [`Board::to_matrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Creates a board from a generated problem: filled positions become
    /// clue cells, the rest start empty.
    #[must_use]
    pub fn from_problem(problem: &DigitMatrix) -> Self {
        let mut cells = [Cell::empty(); 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = Cell::clue(digit);
            }
        }
        Self { cells }
    }

    /// Returns the number of clue cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_clue()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Projects the board's current values into a [`DigitMatrix`].
    ///
    /// The projection carries values only (no clue or error flags) and is
    /// what rule checks run against, so validation always sees the live,
    /// possibly conflicting player board.
    #[must_use]
    pub fn to_matrix(&self) -> DigitMatrix {
        let mut matrix = DigitMatrix::new();
        for pos in Position::ALL {
            matrix.set(pos, self[pos].value());
        }
        matrix
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.index()]
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::Digit;

    use super::*;

    #[test]
    fn test_from_problem_marks_clues() {
        let problem: DigitMatrix = format!("5...2....{}", ".".repeat(72)).parse().unwrap();
        let board = Board::from_problem(&problem);

        assert_eq!(board.clue_count(), 2);
        assert_eq!(board[Position::new(0, 0)].value(), Some(Digit::D5));
        assert!(board[Position::new(0, 0)].is_clue());
        assert!(board[Position::new(0, 1)].is_empty());
        assert!(!board.is_complete());
    }

    #[test]
    fn test_to_matrix_round_trips_values() {
        let problem: DigitMatrix = format!("5...2....{}", ".".repeat(72)).parse().unwrap();
        let board = Board::from_problem(&problem);
        assert_eq!(board.to_matrix(), problem);
    }
}
