//! The sliding-tile puzzle state machine.

use derive_more::{Display, Error};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use tileshift_core::{GridError, Position, Tile, TileGrid};
use tinyvec::ArrayVec;

use crate::seed::ShuffleSeed;

/// A rejected move: the attempted cell is not adjacent to the hole.
///
/// Carries both coordinates for diagnostics. The puzzle is guaranteed
/// unchanged when this error is returned, so the caller may simply retry
/// with a different cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cannot slide {attempted}: not adjacent to the hole at {hole}")]
pub struct InvalidMove {
    /// The cell the caller tried to slide.
    pub attempted: Position,
    /// The hole position at the time of the attempt.
    pub hole: Position,
}

/// A sliding-tile puzzle session.
///
/// Owns a [`TileGrid`], tracks the hole position incrementally (no rescans
/// on the move path), validates moves, detects the solved configuration,
/// and can scramble itself with a reproducible random walk.
///
/// The move counter records successful [`slide`](Puzzle::slide) calls since
/// construction or since the last shuffle; it is informational and never
/// used for validation.
///
/// # Examples
///
/// ```
/// use tileshift_core::Position;
/// use tileshift_game::Puzzle;
///
/// let mut puzzle = Puzzle::from_dimension(3);
/// assert!(puzzle.is_solved());
///
/// // Slide the "6" tile (just above the hole) down into the hole.
/// puzzle.slide(Position::new(2, 1)).unwrap();
/// assert!(!puzzle.is_solved());
/// assert_eq!(puzzle.hole(), Position::new(2, 1));
/// assert_eq!(puzzle.move_count(), 1);
/// ```
#[derive(Debug)]
pub struct Puzzle {
    grid: TileGrid,
    hole: Position,
    moves: usize,
}

impl Puzzle {
    /// Shuffle length used when callers have no particular preference.
    pub const DEFAULT_SHUFFLE_ITERATIONS: usize = 5000;

    /// Creates a solved puzzle of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileshift_core::Position;
    /// use tileshift_game::Puzzle;
    ///
    /// let puzzle = Puzzle::from_dimension(4);
    /// assert!(puzzle.is_solved());
    /// assert_eq!(puzzle.hole(), Position::new(3, 3));
    /// assert_eq!(puzzle.move_count(), 0);
    /// ```
    #[must_use]
    pub fn from_dimension(side: u8) -> Self {
        Self::from_grid(TileGrid::solved(side))
    }

    /// Wraps an already validated grid in a fresh session.
    ///
    /// The grid may hold any arrangement, including permutations that cannot
    /// reach the solved layout (see [`is_solvable`](Puzzle::is_solvable)).
    /// The hole is located by scanning once; the move counter starts at 0.
    #[must_use]
    pub fn from_grid(grid: TileGrid) -> Self {
        let hole = grid.hole();
        Self {
            grid,
            hole,
            moves: 0,
        }
    }

    /// Validates caller-supplied rows and wraps them in a fresh session.
    ///
    /// `None` marks the hole.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] when the rows violate a grid invariant; see
    /// [`TileGrid::from_rows`].
    pub fn from_rows(rows: Vec<Vec<Option<Tile>>>) -> Result<Self, GridError> {
        Ok(Self::from_grid(TileGrid::from_rows(rows)?))
    }

    /// Returns a read-only view of the grid.
    #[must_use]
    pub const fn tiles(&self) -> &TileGrid {
        &self.grid
    }

    /// Returns the current hole position.
    #[must_use]
    pub const fn hole(&self) -> Position {
        self.hole
    }

    /// Returns the number of successful slides since construction or since
    /// the last shuffle.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.moves
    }

    /// Returns every cell that can slide into the hole right now: the
    /// in-bounds orthogonal neighbors of the hole, in ascending `(x, y)`
    /// order.
    ///
    /// Between 2 and 4 cells for grids of side 2 or more; empty for the
    /// degenerate single-cell puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileshift_core::Position;
    /// use tileshift_game::Puzzle;
    ///
    /// let puzzle = Puzzle::from_dimension(3);
    /// assert_eq!(
    ///     puzzle.available_moves(),
    ///     vec![Position::new(1, 2), Position::new(2, 1)],
    /// );
    /// ```
    #[must_use]
    pub fn available_moves(&self) -> Vec<Position> {
        self.grid.neighbors(self.hole).collect()
    }

    /// Slides the tile at `pos` into the hole.
    ///
    /// On success the two cells swap contents, the hole moves to `pos`, and
    /// the move counter increments.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when `pos` is not orthogonally adjacent to
    /// the hole (sliding the hole onto itself is never adjacent, so it also
    /// fails). The grid, hole, and counter are left exactly as they were.
    pub fn slide(&mut self, pos: Position) -> Result<(), InvalidMove> {
        if !self.grid.contains(pos) || !pos.is_adjacent(self.hole) {
            return Err(InvalidMove {
                attempted: pos,
                hole: self.hole,
            });
        }
        self.grid.swap(pos, self.hole);
        self.hole = pos;
        self.moves += 1;
        Ok(())
    }

    /// Returns whether the grid matches the solved layout of its side.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Returns whether the solved layout is reachable from the current
    /// arrangement by legal moves.
    ///
    /// Uses the inversion-parity test: for odd sides the arrangement is
    /// solvable iff the inversion count of the row-major labels is even; for
    /// even sides, iff the inversion count plus the hole's row index is odd.
    /// Legal moves never change the answer, so a shuffled puzzle stays in
    /// its starting parity class.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let labels: Vec<u16> = self
            .grid
            .rows()
            .flat_map(|row| row.iter().copied())
            .flatten()
            .map(Tile::value)
            .collect();
        let inversions: usize = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| labels[i + 1..].iter().filter(|&&later| later < label).count())
            .sum();
        if self.grid.side() % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + usize::from(self.hole.y())) % 2 == 1
        }
    }

    /// Scrambles the puzzle with `iterations` uniformly random legal moves
    /// drawn from a fresh seed, then resets the move counter.
    ///
    /// Returns the seed, so the exact walk can be replayed later with
    /// [`shuffle_with_seed`](Puzzle::shuffle_with_seed). Shuffling never
    /// fails: the single-cell puzzle has no legal moves and the walk is a
    /// no-op.
    pub fn shuffle(&mut self, iterations: usize) -> ShuffleSeed {
        let seed = ShuffleSeed::random();
        self.shuffle_with_seed(iterations, seed);
        seed
    }

    /// Scrambles the puzzle with the random walk determined by `seed`.
    ///
    /// The same seed applied to the same starting arrangement always
    /// produces the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileshift_game::{Puzzle, ShuffleSeed};
    ///
    /// let seed = ShuffleSeed::from_bytes([7; 32]);
    /// let mut a = Puzzle::from_dimension(4);
    /// let mut b = Puzzle::from_dimension(4);
    /// a.shuffle_with_seed(1000, seed);
    /// b.shuffle_with_seed(1000, seed);
    /// assert_eq!(a.tiles(), b.tiles());
    /// ```
    pub fn shuffle_with_seed(&mut self, iterations: usize, seed: ShuffleSeed) {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        self.shuffle_with_rng(iterations, &mut rng);
    }

    /// Scrambles the puzzle using a caller-managed generator.
    ///
    /// Each step picks uniformly among the currently available moves and
    /// applies it through the same swap path as [`slide`](Puzzle::slide);
    /// afterwards the move counter resets to 0, so the scramble does not
    /// count toward the solving history.
    pub fn shuffle_with_rng<R: Rng + ?Sized>(&mut self, iterations: usize, rng: &mut R) {
        for _ in 0..iterations {
            let candidates: ArrayVec<[Position; 4]> = self.grid.neighbors(self.hole).collect();
            if candidates.is_empty() {
                break;
            }
            let pos = candidates[rng.random_range(0..candidates.len())];
            self.grid.swap(pos, self.hole);
            self.hole = pos;
        }
        self.moves = 0;
    }
}

/// Cloning deep-copies the grid; the clone shares no storage with the
/// source and starts its own move history at 0, as if freshly constructed
/// from the copied grid.
impl Clone for Puzzle {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            hole: self.hole,
            moves: 0,
        }
    }
}
