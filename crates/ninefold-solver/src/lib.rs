//! Randomized backtracking completion for Sudoku grids.
//!
//! This crate provides [`BacktrackSolver`], a depth-first search that
//! completes a partially filled [`DigitMatrix`] into a full valid solution,
//! or reports that no completion exists. Candidate digits are tried in an
//! order shuffled by an injected random source, so repeated runs over the
//! same clues produce varied solutions while seeded runs stay reproducible.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::DigitMatrix;
//! use ninefold_solver::BacktrackSolver;
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//!
//! let mut matrix = DigitMatrix::new();
//! let mut rng = Pcg64::from_seed([7; 32]);
//!
//! assert!(BacktrackSolver::new().solve(&mut matrix, &mut rng));
//! assert!(matrix.is_solved());
//! ```

pub mod backtrack;

pub use self::backtrack::BacktrackSolver;
