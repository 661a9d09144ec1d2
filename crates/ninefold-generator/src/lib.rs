//! Sudoku puzzle generation for the Ninefold engine.
//!
//! Generation runs in two stages. The clue seeder ([`seed_clues`]) scatters a
//! small number of mutually consistent digits across an empty board, then the
//! backtracking solver completes them into a full solution; the scattered
//! clues become the problem and the completion becomes the answer.
//!
//! All randomness flows from a [`PuzzleSeed`]: the same seed always yields
//! the same puzzle, which makes runs reproducible in tests and benchmarks
//! while fresh seeds give fresh puzzles.
//!
//! Note that a seeded puzzle is guaranteed to be *consistent* (its clues do
//! not contradict each other and at least one completion exists), but not
//! *unique*: with the default 17 clues many completions usually exist.
//! Verifying uniqueness is out of scope here.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate();
//!
//! assert_eq!(puzzle.problem.filled_count(), 17);
//! assert!(puzzle.solution.is_solved());
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{
        DEFAULT_CLUE_COUNT, GenerateError, GeneratedPuzzle, PuzzleGenerator, SeedCluesError,
        seed_clues,
    },
    seed::{ParseSeedError, PuzzleSeed},
};
