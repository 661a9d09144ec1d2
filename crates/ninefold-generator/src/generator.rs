//! Clue seeding and puzzle assembly.

use std::{
    error::Error,
    fmt::{self, Display},
};

use ninefold_core::{Digit, DigitMatrix, Position};
use ninefold_solver::BacktrackSolver;
use rand::{Rng, seq::SliceRandom as _};

use crate::PuzzleSeed;

/// Default number of clues in a generated problem.
///
/// Seventeen is the smallest clue count for which a properly solvable Sudoku
/// is known to exist. The generator only guarantees that its clues are
/// mutually consistent, not that the resulting puzzle has a unique solution.
pub const DEFAULT_CLUE_COUNT: usize = 17;

/// A generated puzzle: the sparse problem, its full solution, and the seed
/// that produced both.
///
/// The solution agrees with the problem at every clue position; the problem
/// is the player-facing starting grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The partially filled problem grid.
    pub problem: DigitMatrix,
    /// A complete valid solution extending the problem.
    pub solution: DigitMatrix,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Error returned when clue seeding runs a cell out of legal digits.
///
/// With few clues scattered over 81 cells this is vanishingly rare: a cell
/// would need nine distinct digits among its at most 20 earlier-placed peers.
/// It is still structurally possible, so seeding reports it instead of
/// retrying digits forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCluesError {
    /// The cell for which no digit was legal.
    pub position: Position,
}

impl Display for SeedCluesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal digit remained for clue cell {}", self.position)
    }
}

impl Error for SeedCluesError {}

/// Error returned by a single seeded generation attempt.
///
/// The failing seed is carried so callers can log or skip it. The generator
/// never retries a seed on its own; drawing a replacement is the caller's
/// policy (see [`PuzzleGenerator::generate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Clue seeding failed before a full clue set was placed.
    Seeding {
        /// The seed of the failed attempt.
        seed: PuzzleSeed,
        /// The underlying seeding failure.
        source: SeedCluesError,
    },
    /// The seeded clues admit no completion.
    Unsolvable {
        /// The seed of the failed attempt.
        seed: PuzzleSeed,
    },
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeding { seed, source } => {
                write!(f, "seed {seed} failed clue seeding: {source}")
            }
            Self::Unsolvable { seed } => {
                write!(f, "seed {seed} produced clues with no completion")
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seeding { source, .. } => Some(source),
            Self::Unsolvable { .. } => None,
        }
    }
}

/// Scatters `clue_count` mutually consistent clues over an empty board.
///
/// All 81 positions are shuffled and the first `clue_count` become clue
/// cells, in shuffled order. Each clue cell receives a digit drawn uniformly
/// from the digits legal against the clues placed so far.
///
/// The returned matrix has exactly `clue_count` filled cells, pairwise legal
/// under [`DigitMatrix::is_legal`]; the rest are empty.
///
/// # Errors
///
/// Returns [`SeedCluesError`] if a clue cell has no legal digit left, which
/// requires all nine digits among its earlier-placed peers.
///
/// # Panics
///
/// Panics if `clue_count` exceeds 81.
pub fn seed_clues<R>(rng: &mut R, clue_count: usize) -> Result<DigitMatrix, SeedCluesError>
where
    R: Rng + ?Sized,
{
    assert!(clue_count <= 81, "clue_count must be at most 81");

    let mut positions = Position::ALL;
    positions.shuffle(rng);

    let mut matrix = DigitMatrix::new();
    for &position in &positions[..clue_count] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        let Some(digit) = digits
            .into_iter()
            .find(|&digit| matrix.is_legal(position, digit))
        else {
            return Err(SeedCluesError { position });
        };
        matrix.set(position, Some(digit));
    }
    Ok(matrix)
}

/// Generates Sudoku puzzles from reproducible seeds.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
///
/// // Deterministic: one seed, one puzzle
/// let seed = PuzzleSeed::from_phrase("example");
/// let first = generator.generate_with_seed(seed).unwrap();
/// let second = generator.generate_with_seed(seed).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    clue_count: usize,
}

impl PuzzleGenerator {
    /// Creates a generator producing [`DEFAULT_CLUE_COUNT`]-clue problems.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clue_count: DEFAULT_CLUE_COUNT,
        }
    }

    /// Creates a generator producing problems with `clue_count` clues.
    ///
    /// # Panics
    ///
    /// Panics if `clue_count` is 0 or exceeds 81.
    #[must_use]
    pub fn with_clue_count(clue_count: usize) -> Self {
        assert!(
            (1..=81).contains(&clue_count),
            "clue_count must be between 1 and 81"
        );
        Self { clue_count }
    }

    /// Returns the number of clues in generated problems.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.clue_count
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// Seeds whose attempt fails (infeasible clues or exhausted seeding) are
    /// discarded and a new seed is drawn; with the default clue count a
    /// retry essentially never happens.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        loop {
            if let Ok(puzzle) = self.generate_with_seed(PuzzleSeed::random()) {
                return puzzle;
            }
        }
    }

    /// Runs one deterministic generation attempt for `seed`.
    ///
    /// The seed's RNG drives clue placement and the solver's candidate
    /// order, so the result is a pure function of the seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if clue seeding fails or the seeded clues
    /// admit no completion. No retry is attempted; the caller decides
    /// whether to draw another seed.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();

        let problem = seed_clues(&mut rng, self.clue_count)
            .map_err(|source| GenerateError::Seeding { seed, source })?;

        let mut solution = problem.clone();
        if !BacktrackSolver::new().solve(&mut solution, &mut rng) {
            return Err(GenerateError::Unsolvable { seed });
        }

        Ok(GeneratedPuzzle {
            problem,
            solution,
            seed,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
