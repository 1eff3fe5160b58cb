//! Board: a fixed `size × size` grid of cells.
//!
//! ## Identity
//!
//! Equality and hashing are structural over every cell's identity token in
//! row-major order. Two boards with the same identity layout are the same
//! state regardless of provenance (cell-level equality already ignores move
//! templates). The search strategies treat the state space as a graph keyed
//! by this identity.
//!
//! ## Copy-on-write
//!
//! The grid is an `im::Vector`, so cloning a board for a successor is O(1)
//! structural sharing plus the handful of cells the move touches. Successor
//! application never mutates the parent board.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::ConfigError;

/// An absolute board coordinate (row, column), zero-based from the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular board of cells, fixed `size × size` for a search run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major flat grid; index = `row * size + col`.
    cells: Vector<Cell>,
}

impl Board {
    /// Build a board from a row-major grid of cells.
    ///
    /// Fails fast on an empty or non-square grid; a zero-cell board is a
    /// precondition violation the engine refuses to search.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        let size = rows.len();
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(ConfigError::NonSquareBoard {
                rows: size,
                cols: row.len(),
            });
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { size, cells })
    }

    /// Build an all-empty board.
    pub fn empty(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        Ok(Self {
            size,
            cells: std::iter::repeat(Cell::empty()).take(size * size).collect(),
        })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// The cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Whether the square at `pos` holds no piece identity.
    #[must_use]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        !self.cell(pos).is_occupied()
    }

    /// Replace the cell at `pos` (in place; used by board builders).
    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells.set(idx, cell);
    }

    /// Swap the contents of two squares in place (used by shufflers).
    pub fn swap_cells(&mut self, a: Pos, b: Pos) {
        let (ia, ib) = (self.index(a), self.index(b));
        self.cells.swap(ia, ib);
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Positions of all occupied squares, row-major.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| !self.is_empty_at(pos))
    }

    // === Copy-on-write move application ===

    /// A new board with the contents of `from` and `to` swapped.
    #[must_use]
    pub fn with_swap(&self, from: Pos, to: Pos) -> Self {
        let mut next = self.clone();
        next.swap_cells(from, to);
        next
    }

    /// A new board where `to` holds the piece from `from` and `from` is
    /// empty. The prior occupant of `to` (if any) is destroyed.
    #[must_use]
    pub fn with_displacement(&self, from: Pos, to: Pos) -> Self {
        let mut next = self.clone();
        let piece = next.cell(from).clone();
        next.set_cell(to, piece);
        next.set_cell(from, Cell::empty());
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::render_board(self))
    }
}
