//! Square tile grid with well-formedness validation.
//!
//! This module provides [`TileGrid`], the storage layer of the puzzle: a
//! square arrangement of labeled cells with exactly one empty cell (the
//! hole). Every constructor either produces a grid satisfying the full
//! invariant set or fails with a [`GridError`], so downstream code never has
//! to re-validate.
//!
//! # Invariants
//!
//! - Exactly one cell is empty.
//! - All labels are pairwise distinct.
//! - The grid is square, with side between 1 and 255.
//!
//! # Examples
//!
//! ```
//! use tileshift_core::{Position, TileGrid};
//!
//! let grid = TileGrid::solved(3);
//! assert!(grid.is_solved());
//! assert_eq!(grid.hole(), Position::new(2, 2));
//!
//! // Swapping two cells preserves the invariants but not solvedness.
//! let mut grid = grid;
//! grid.swap(Position::new(1, 2), Position::new(2, 2));
//! assert!(!grid.is_solved());
//! assert_eq!(grid.hole(), Position::new(1, 2));
//! ```

use std::{fmt, ops::Index};

use derive_more::{Display, Error};

use crate::{position::Position, tile::Tile};

/// Reasons a caller-supplied grid is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The grid has no rows.
    #[display("grid has no rows")]
    Empty,
    /// The grid has more rows than the supported maximum side length.
    #[display("grid with {rows} rows exceeds the maximum side of 255")]
    TooLarge {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row's length does not match the number of rows.
    #[display("grid is not square: {rows} rows, but row {y} has {len} cells")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Index of the offending row.
        y: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// No cell is empty.
    #[display("grid has no empty cell")]
    MissingHole,
    /// More than one cell is empty.
    #[display("grid has more than one empty cell: {first} and {second}")]
    ExtraHole {
        /// First empty cell in row-major scan order.
        first: Position,
        /// Second empty cell in row-major scan order.
        second: Position,
    },
    /// The same label appears on more than one tile.
    #[display("tile {tile} appears at both {first} and {second}")]
    DuplicateTile {
        /// The repeated label.
        tile: Tile,
        /// First occurrence in row-major scan order.
        first: Position,
        /// Second occurrence in row-major scan order.
        second: Position,
    },
}

/// A square grid of tiles with exactly one empty cell.
///
/// Cells are stored row-major and addressed by [`Position`]; `None` marks the
/// hole. In the solved layout the cell at `(x, y)` holds label
/// `y * side + x + 1`, except the bottom-right cell which is the hole.
///
/// # Examples
///
/// ```
/// use tileshift_core::{Position, Tile, TileGrid};
///
/// let grid = TileGrid::solved(3);
/// assert_eq!(grid[Position::new(2, 1)], Some(Tile::new(6)));
/// assert_eq!(grid[Position::new(2, 2)], None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    side: u8,
    cells: Vec<Option<Tile>>,
}

impl TileGrid {
    /// Creates the solved grid of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileshift_core::{Position, Tile, TileGrid};
    ///
    /// let grid = TileGrid::solved(2);
    /// assert_eq!(grid[Position::new(0, 0)], Some(Tile::new(1)));
    /// assert_eq!(grid[Position::new(1, 0)], Some(Tile::new(2)));
    /// assert_eq!(grid[Position::new(0, 1)], Some(Tile::new(3)));
    /// assert_eq!(grid[Position::new(1, 1)], None);
    /// ```
    #[must_use]
    pub fn solved(side: u8) -> Self {
        assert!(side > 0, "grid side must be at least 1, got {side}");
        let len = usize::from(side) * usize::from(side);
        let mut cells: Vec<Option<Tile>> = Vec::with_capacity(len);
        for y in 0..u16::from(side) {
            for x in 0..u16::from(side) {
                cells.push(Some(Tile::new(y * u16::from(side) + x + 1)));
            }
        }
        cells[len - 1] = None;
        Self { side, cells }
    }

    /// Builds a grid from caller-supplied rows, validating every invariant.
    ///
    /// The rows are consumed top to bottom; within a row, cells run left to
    /// right. `None` marks the hole.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking shape before contents:
    /// [`GridError::Empty`], [`GridError::TooLarge`], or
    /// [`GridError::NotSquare`] for a malformed shape, then
    /// [`GridError::ExtraHole`], [`GridError::MissingHole`], or
    /// [`GridError::DuplicateTile`] for malformed contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileshift_core::{Tile, TileGrid};
    ///
    /// let grid = TileGrid::from_rows(vec![
    ///     vec![Some(Tile::new(1)), Some(Tile::new(2))],
    ///     vec![Some(Tile::new(3)), None],
    /// ])?;
    /// assert!(grid.is_solved());
    /// # Ok::<(), tileshift_core::GridError>(())
    /// ```
    pub fn from_rows(rows: Vec<Vec<Option<Tile>>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let Ok(side) = u8::try_from(rows.len()) else {
            return Err(GridError::TooLarge { rows: rows.len() });
        };
        for (y, row) in rows.iter().enumerate() {
            if row.len() != rows.len() {
                return Err(GridError::NotSquare {
                    rows: rows.len(),
                    y,
                    len: row.len(),
                });
            }
        }

        let cells: Vec<Option<Tile>> = rows.into_iter().flatten().collect();
        let grid = Self { side, cells };

        let mut hole = None;
        let mut labels = Vec::with_capacity(grid.cells.len() - 1);
        for pos in grid.positions() {
            match grid[pos] {
                Some(tile) => labels.push((tile, pos)),
                None => {
                    if let Some(first) = hole {
                        return Err(GridError::ExtraHole { first, second: pos });
                    }
                    hole = Some(pos);
                }
            }
        }
        if hole.is_none() {
            return Err(GridError::MissingHole);
        }

        // Stable sort keeps equal labels in scan order for the error report.
        labels.sort_by_key(|&(tile, _)| tile);
        for pair in labels.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(GridError::DuplicateTile {
                    tile: pair[0].0,
                    first: pair[0].1,
                    second: pair[1].1,
                });
            }
        }

        Ok(grid)
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn side(&self) -> u8 {
        self.side
    }

    /// Returns whether `pos` addresses a cell of this grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x() < self.side && pos.y() < self.side
    }

    /// Returns the position of the empty cell.
    #[must_use]
    pub fn hole(&self) -> Position {
        for pos in self.positions() {
            if self[pos].is_none() {
                return pos;
            }
        }
        unreachable!("a tile grid always contains exactly one empty cell")
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let side = self.side;
        (0..side).flat_map(move |y| (0..side).map(move |x| Position::new(x, y)))
    }

    /// Returns the in-bounds orthogonal neighbors of `pos`, in ascending
    /// `(x, y)` order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileshift_core::{Position, TileGrid};
    ///
    /// let grid = TileGrid::solved(3);
    /// let neighbors: Vec<_> = grid.neighbors(Position::new(2, 2)).collect();
    /// assert_eq!(neighbors, vec![Position::new(1, 2), Position::new(2, 1)]);
    /// ```
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        let side = u16::from(self.side);
        let (x, y) = (pos.x(), pos.y());
        let left = x.checked_sub(1).map(|x| Position::new(x, y));
        let above = y.checked_sub(1).map(|y| Position::new(x, y));
        let below = (u16::from(y) + 1 < side).then(|| Position::new(x, y + 1));
        let right = (u16::from(x) + 1 < side).then(|| Position::new(x + 1, y));
        [left, above, below, right].into_iter().flatten()
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> {
        self.cells.chunks(usize::from(self.side))
    }

    /// Swaps the contents of two cells.
    ///
    /// Any swap preserves the grid invariants, so this is the primitive all
    /// mutation goes through.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) {
        let a = self.cell_index(a);
        let b = self.cell_index(b);
        self.cells.swap(a, b);
    }

    /// Returns whether the grid matches the solved layout of its side.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells.iter().enumerate().all(|(i, cell)| match cell {
            Some(tile) => i != last && usize::from(tile.value()) == i + 1,
            None => i == last,
        })
    }

    fn cell_index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {side}x{side} grid",
            side = self.side,
        );
        usize::from(pos.y()) * usize::from(self.side) + usize::from(pos.x())
    }
}

impl Index<Position> for TileGrid {
    type Output = Option<Tile>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.cell_index(pos)]
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).max(1).to_string().len();
        for row in self.rows() {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>width$}", tile.value())?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
