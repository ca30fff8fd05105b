//! Benchmarks for shuffle walks.
//!
//! This benchmark suite measures the cost of scrambling a board with
//! `Puzzle::shuffle_with_seed`, which dominates setup time for callers that
//! scramble on every new game.
//!
//! # Benchmarks
//!
//! - **`shuffle_4`**: 5000-move scramble of a 4x4 board (the classic
//!   15-puzzle).
//! - **`shuffle_8`**: 5000-move scramble of an 8x8 board, exercising the
//!   larger-grid path.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! walks:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffle
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use tileshift_game::{Puzzle, ShuffleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_shuffle(c: &mut Criterion, name: &str, side: u8) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ShuffleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || (Puzzle::from_dimension(side), hint::black_box(*seed)),
                    |(mut puzzle, seed)| {
                        puzzle.shuffle_with_seed(Puzzle::DEFAULT_SHUFFLE_ITERATIONS, seed);
                        puzzle
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_shuffle_4(c: &mut Criterion) {
    bench_shuffle(c, "shuffle_4", 4);
}

fn bench_shuffle_8(c: &mut Criterion) {
    bench_shuffle(c, "shuffle_8", 8);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_shuffle_4,
        bench_shuffle_8
);
criterion_main!(benches);
