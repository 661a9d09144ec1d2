//! Core data structures for the Ninefold Sudoku engine.
//!
//! This crate provides the data model shared by the generator, solver, and
//! game-session crates, together with the single constraint validator that
//! every other component routes rule checks through.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`position`]: board coordinates (row, column) in 0-8
//! - [`matrix`]: [`DigitMatrix`], a 9x9 grid of optional digits, with the
//!   row/column/box uniqueness check [`DigitMatrix::is_legal`]
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitMatrix, Position};
//!
//! let mut matrix = DigitMatrix::new();
//! matrix.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 is no longer legal elsewhere in row 0
//! assert!(!matrix.is_legal(Position::new(0, 4), Digit::D5));
//! // but the placed cell stays legal against its own value
//! assert!(matrix.is_legal(Position::new(0, 0), Digit::D5));
//! ```

pub mod digit;
pub mod matrix;
pub mod position;

pub use self::{
    digit::{Digit, DigitOutOfRange},
    matrix::{DigitMatrix, ParseMatrixError},
    position::Position,
};
