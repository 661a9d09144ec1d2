//! Interactive game-session state for the Ninefold Sudoku engine.
//!
//! A [`Game`] owns the player-visible [`Board`] and the authoritative
//! solution for the whole session. The board is the editable projection of
//! the puzzle: clue cells are immutable, other cells are filled and cleared
//! by the player, and [`Game::scan`] recomputes per-cell error flags from
//! the board's own live values after every edit.
//!
//! Rendering and input parsing are deliberately out of scope: a front end
//! reads each cell's `(value, is_clue, has_error)` triple for display and
//! hands the session pre-validated coordinates and digits.
//!
//! # Examples
//!
//! ```
//! use ninefold_game::Game;
//! use ninefold_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate();
//! let mut game = Game::new(puzzle);
//!
//! // A fresh 17-clue board is far from complete
//! assert!(!game.scan());
//!
//! // Giving up fills in the stored solution
//! game.reveal();
//! assert!(game.scan());
//! ```

pub mod board;
pub mod cell;
pub mod game;

pub use self::{board::Board, cell::Cell, game::Game};

/// Error returned by board-editing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The targeted cell is a clue and cannot be filled or cleared.
    #[display("cannot modify a clue cell")]
    CannotModifyClueCell,
}
