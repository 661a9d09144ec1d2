//! Benchmarks for puzzle generation.
//!
//! Measures one full seeded generation attempt (clue seeding plus
//! backtracking completion) at the default 17 clues and at a denser 30
//! clues, using fixed seeds for reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "6f1d2c3b4a5968778695a4b3c2d1e0f16f1d2c3b4a5968778695a4b3c2d1e0f1",
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210",
];

fn bench_generate_17(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    run(c, "generate_17", &generator);
}

fn bench_generate_30(c: &mut Criterion) {
    let generator = PuzzleGenerator::with_clue_count(30);
    run(c, "generate_30", &generator);
}

fn run(c: &mut Criterion, name: &str, generator: &PuzzleGenerator) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).expect("valid hex seed");
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_generate_17, bench_generate_30);
criterion_main!(benches);
