//! Example demonstrating basic puzzle scrambling and play.
//!
//! This example shows how to:
//! - Create a solved `Puzzle` of a chosen side length
//! - Scramble it with a fresh or caller-supplied seed
//! - Display the board, the seed, and the available moves
//! - Play legal moves and watch the move counter
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_play
//! ```
//!
//! Choose the board size and scramble length:
//!
//! ```sh
//! cargo run --example shuffle_play -- --side 3 --iterations 200
//! ```
//!
//! Replay a scramble from a previously printed seed:
//!
//! ```sh
//! cargo run --example shuffle_play -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use tileshift_game::{Puzzle, ShuffleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the board.
    #[arg(long, value_name = "SIDE", default_value_t = 4)]
    side: u8,

    /// Number of random moves used to scramble the board.
    #[arg(long, value_name = "COUNT", default_value_t = Puzzle::DEFAULT_SHUFFLE_ITERATIONS)]
    iterations: usize,

    /// Hex seed for a reproducible scramble (64 characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of legal moves to play after scrambling.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    play: usize,
}

fn main() {
    let args = Args::parse();
    if args.side == 0 {
        eprintln!("--side must be at least 1.");
        process::exit(1);
    }

    let mut puzzle = Puzzle::from_dimension(args.side);
    let seed = match &args.seed {
        Some(text) => match text.parse::<ShuffleSeed>() {
            Ok(seed) => {
                puzzle.shuffle_with_seed(args.iterations, seed);
                seed
            }
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => puzzle.shuffle(args.iterations),
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Scrambled ({side}x{side}, {n} random moves):", side = args.side, n = args.iterations);
    print!("{}", puzzle.tiles());
    println!();

    println!("Available moves:");
    for pos in puzzle.available_moves() {
        println!("  {pos}");
    }
    println!();

    for _ in 0..args.play {
        let Some(&target) = puzzle.available_moves().first() else {
            break;
        };
        puzzle.slide(target).expect("available moves are always legal");
        println!("After sliding {target}:");
        print!("{}", puzzle.tiles());
        println!();
    }

    println!("Moves played: {}", puzzle.move_count());
    println!("Solved: {}", puzzle.is_solved());
}
