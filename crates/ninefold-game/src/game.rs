//! The game session.

use ninefold_core::{Digit, DigitMatrix, Position};
use ninefold_generator::GeneratedPuzzle;

use crate::{Board, Cell, GameError};

/// A single-player Sudoku session.
///
/// The session owns the editable [`Board`] and the authoritative solution
/// matrix for its entire lifetime; both are created once from a generated
/// puzzle and never shared. Player edits go through [`Game::set_digit`] and
/// [`Game::clear_cell`], which refuse to touch clue cells. Edits are
/// otherwise permissive: a conflicting digit is accepted and surfaced by the
/// next [`Game::scan`] instead of being rejected.
///
/// The solution matrix is consulted only when the player gives up
/// ([`Game::reveal`]); error detection checks the board against the rules,
/// not against the solution, so a correct-but-different digit in a legal
/// position is never flagged.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Position};
/// use ninefold_game::Game;
/// use ninefold_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate();
/// let mut game = Game::new(puzzle);
///
/// let empty_pos = Position::ALL
///     .into_iter()
///     .find(|&pos| game.cell(pos).is_empty())
///     .expect("a 17-clue board has empty cells");
///
/// game.set_digit(empty_pos, Digit::D5).unwrap();
/// assert_eq!(game.cell(empty_pos).value(), Some(Digit::D5));
///
/// game.clear_cell(empty_pos).unwrap();
/// assert!(game.cell(empty_pos).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    solution: DigitMatrix,
}

impl Game {
    /// Creates a new session from a generated puzzle.
    ///
    /// Every filled cell of the problem becomes an immutable clue; the
    /// puzzle's solution is kept for [`Game::reveal`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        Self {
            board: Board::from_problem(&problem),
            solution,
        }
    }

    /// Creates a session directly from a problem and solution matrix.
    ///
    /// Filled cells of `problem` become clues. The caller is responsible for
    /// `solution` actually extending `problem`; this is primarily a test and
    /// import constructor.
    #[must_use]
    pub fn from_matrices(problem: &DigitMatrix, solution: &DigitMatrix) -> Self {
        Self {
            board: Board::from_problem(problem),
            solution: solution.clone(),
        }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.board[pos]
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the stored full solution.
    #[must_use]
    pub fn solution(&self) -> &DigitMatrix {
        &self.solution
    }

    /// Returns the number of clue cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.board.clue_count()
    }

    /// Places `digit` at `pos`, replacing any previous player digit.
    ///
    /// The placement is accepted even if it conflicts with other digits on
    /// the board; conflicts are reported by the next [`Game::scan`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyClueCell`] if `pos` is a clue cell.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.board[pos].is_clue() {
            return Err(GameError::CannotModifyClueCell);
        }
        self.board.cell_mut(pos).set_value(Some(digit));
        Ok(())
    }

    /// Clears the player digit at `pos`. Clearing an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyClueCell`] if `pos` is a clue cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.board[pos].is_clue() {
            return Err(GameError::CannotModifyClueCell);
        }
        self.board.cell_mut(pos).set_value(None);
        Ok(())
    }

    /// Recomputes every cell's error flag and reports completion.
    ///
    /// For each cell the error flag is cleared, then set again if the cell
    /// holds a player digit that is illegal against the board's own current
    /// values. Clue cells are never flagged: their values are mutually legal
    /// by construction, so any conflict involving a clue is attributed to
    /// the player cell that introduced it. Empty cells only mark the board
    /// incomplete.
    ///
    /// Returns `true` when the board is complete and no cell is in error.
    /// This is the one place error flags are written, and it is idempotent:
    /// scanning twice without an intervening edit yields identical flags.
    pub fn scan(&mut self) -> bool {
        let matrix = self.board.to_matrix();
        let mut complete = true;
        let mut clean = true;

        for pos in Position::ALL {
            let has_error = match matrix.get(pos) {
                None => {
                    complete = false;
                    false
                }
                Some(_) if self.board[pos].is_clue() => false,
                Some(digit) => !matrix.is_legal(pos, digit),
            };
            clean &= !has_error;
            self.board.cell_mut(pos).set_error(has_error);
        }

        complete && clean
    }

    /// Gives up: copies the stored solution into every non-clue cell and
    /// clears all error flags.
    pub fn reveal(&mut self) {
        for pos in Position::ALL {
            let cell = self.board.cell_mut(pos);
            if !cell.is_clue() {
                cell.set_value(self.solution.get(pos));
            }
            cell.set_error(false);
        }
    }

    /// Returns `true` if the board is completely filled with a valid
    /// solution. Unlike [`Game::scan`] this does not touch error flags.
    ///
    /// Any valid completion counts, not just the stored solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.to_matrix().is_solved()
    }
}
