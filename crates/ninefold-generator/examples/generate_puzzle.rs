//! Example demonstrating seeded Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle from a fresh random seed
//! - Replay a specific seed or a memorable phrase
//! - Generate a batch of puzzles in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Replay a seed printed by an earlier run:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Derive the seed from a phrase, e.g. for a daily puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "2026-08-30"
//! ```
//!
//! Generate several puzzles at once with a custom clue count:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --clues 30 --count 4
//! ```

use std::process;

use clap::Parser;
use ninefold_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Hex seed to replay (64 characters). Mutually exclusive with --phrase.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Number of clues in each generated problem.
    #[arg(long, value_name = "COUNT", default_value_t = 17)]
    clues: usize,

    /// Number of puzzles to generate. Ignored when a seed or phrase is given.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();

    if !(1..=81).contains(&args.clues) {
        eprintln!("--clues must be between 1 and 81.");
        process::exit(1);
    }
    let generator = PuzzleGenerator::with_clue_count(args.clues);

    let fixed_seed = match (&args.seed, &args.phrase) {
        (Some(seed), _) => Some(*seed),
        (None, Some(phrase)) => Some(PuzzleSeed::from_phrase(phrase)),
        (None, None) => None,
    };

    if let Some(seed) = fixed_seed {
        match generator.generate_with_seed(seed) {
            Ok(puzzle) => print_puzzle(&puzzle),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let puzzles: Vec<GeneratedPuzzle> = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect();
    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem.to_string());
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution.to_string());
    println!();
}

fn print_grid(cells: &str) {
    for row in 0..9 {
        let line: String = cells
            .chars()
            .skip(row * 9)
            .take(9)
            .collect();
        println!("  {line}");
    }
}
