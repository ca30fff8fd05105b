//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the data layer shared by components that manipulate
//! N-puzzle boards (8-puzzle, 15-puzzle, and any other square size): the
//! coordinate and tile label types, and the validated square grid that all
//! game logic operates on.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Core types**
//!    - [`position`]: Board coordinates with `(0, 0)` at the top-left
//!    - [`tile`]: Positive tile labels; the hole is `Option::None`
//!
//! 2. **The grid** — [`grid`] provides [`TileGrid`], a square container that
//!    guarantees its invariants at construction time: exactly one empty cell,
//!    pairwise-distinct labels, square shape. Mutation goes through
//!    [`TileGrid::swap`], which preserves all three.
//!
//! 3. **Validation errors** — [`GridError`] reports the first violation found
//!    when building a grid from caller-supplied rows.
//!
//! # Examples
//!
//! ```
//! use tileshift_core::{Position, Tile, TileGrid};
//!
//! // The solved 3x3 layout.
//! let mut grid = TileGrid::solved(3);
//! assert!(grid.is_solved());
//! assert_eq!(grid.hole(), Position::new(2, 2));
//!
//! // Slide the "8" tile into the hole.
//! grid.swap(Position::new(1, 2), Position::new(2, 2));
//! assert_eq!(grid[Position::new(2, 2)], Some(Tile::new(8)));
//! assert_eq!(grid.hole(), Position::new(1, 2));
//! ```

pub mod grid;
pub mod position;
pub mod tile;

// Re-export commonly used types
pub use self::{
    grid::{GridError, TileGrid},
    position::Position,
    tile::Tile,
};
