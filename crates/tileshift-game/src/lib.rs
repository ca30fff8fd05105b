//! Sliding-tile puzzle session management.
//!
//! This crate provides [`Puzzle`], the stateful heart of an N-puzzle: it
//! owns a validated [`TileGrid`](tileshift_core::TileGrid), tracks the hole
//! incrementally, validates slides, detects the solved configuration, and
//! scrambles itself with a reproducible random walk.
//!
//! # Overview
//!
//! - [`puzzle`]: The [`Puzzle`] state machine and its [`InvalidMove`] error.
//! - [`seed`]: [`ShuffleSeed`], the 32-byte reproducibility handle for
//!   shuffles, printable and parseable as hex.
//!
//! Randomness is injectable: [`Puzzle::shuffle`] draws (and returns) a fresh
//! seed, [`Puzzle::shuffle_with_seed`] replays a known one, and
//! [`Puzzle::shuffle_with_rng`] accepts any caller-managed generator.
//!
//! # Examples
//!
//! ```
//! use tileshift_game::Puzzle;
//!
//! let mut puzzle = Puzzle::from_dimension(4);
//! let seed = puzzle.shuffle(Puzzle::DEFAULT_SHUFFLE_ITERATIONS);
//! println!("scrambled with seed {seed}:\n{}", puzzle.tiles());
//!
//! // Play the first legal move.
//! let target = puzzle.available_moves()[0];
//! puzzle.slide(target).unwrap();
//! assert_eq!(puzzle.move_count(), 1);
//! ```

pub mod puzzle;
pub mod seed;

// Re-export commonly used types
pub use self::{
    puzzle::{InvalidMove, Puzzle},
    seed::{SeedParseError, ShuffleSeed},
};
