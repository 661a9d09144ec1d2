//! Depth-first completion with randomized candidate order.

use ninefold_core::{Digit, DigitMatrix, Position};
use rand::{Rng, seq::SliceRandom as _};
use tinyvec::ArrayVec;

/// A backtracking solver that completes a partial [`DigitMatrix`] in place.
///
/// The set of empty cells is collected once at entry, in row-major order, and
/// the search always branches on the first cell of the remaining list. At each
/// cell the nine candidate digits are shuffled with the caller-provided RNG
/// and pruned with [`DigitMatrix::is_legal`]; the first full completion found
/// is kept.
///
/// Pre-filled cells are never modified. The matrix is assumed to be
/// internally consistent on entry: legality of cells that are already filled
/// is not re-checked, so feeding a matrix that already violates the
/// uniqueness rule yields an unspecified (but panic-free) result.
///
/// Recursion depth is bounded by the 81 board cells, so the native call
/// stack suffices. No step or time budget is applied; a degenerate partial
/// assignment can in principle trigger exponential search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Completes `matrix` into a full valid solution.
    ///
    /// On success returns `true` with every previously empty cell filled. On
    /// failure returns `false` and the matrix is restored to its entry state;
    /// an infeasible partial assignment is a normal outcome, not an error.
    /// Whether to retry with different clues is the caller's policy.
    ///
    /// Calling this on an already complete matrix returns `true` immediately
    /// without mutating anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::DigitMatrix;
    /// use ninefold_solver::BacktrackSolver;
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg64;
    ///
    /// let mut matrix: DigitMatrix = format!("53..7....{}", ".".repeat(72))
    ///     .parse()
    ///     .unwrap();
    /// let mut rng = Pcg64::from_seed([42; 32]);
    ///
    /// assert!(BacktrackSolver::new().solve(&mut matrix, &mut rng));
    /// assert!(matrix.is_solved());
    /// ```
    pub fn solve<R>(&self, matrix: &mut DigitMatrix, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        let empty: ArrayVec<[Position; 81]> = matrix.empty_positions().collect();
        Self::fill(matrix, &empty, rng)
    }

    fn fill<R>(matrix: &mut DigitMatrix, remaining: &[Position], rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        let Some((&pos, rest)) = remaining.split_first() else {
            return true;
        };

        let mut candidates = Digit::ALL;
        candidates.shuffle(rng);

        for digit in candidates {
            if !matrix.is_legal(pos, digit) {
                continue;
            }
            matrix.set(pos, Some(digit));
            if Self::fill(matrix, rest, rng) {
                return true;
            }
            matrix.set(pos, None);
        }

        false
    }
}
