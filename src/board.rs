//! Board storage and line-based win queries.
//!
//! The board knows nothing about players or turns: it stores marks and
//! answers geometric questions about them. Bounds are the caller's
//! responsibility — the game layer checks `is_out_of_bounds` before
//! touching a cell, and `get`/`set` index the backing store directly.

use crate::player::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single cell: `None` is empty, `Some` holds the mark placed there.
pub type Cell = Option<Mark>;

/// A width x height grid of cells, row-major.
///
/// Dimensions are fixed at construction; `reset` clears marks but never
/// resizes. Coordinates are `(x, y)` with x in `[0, width)` and y in
/// `[0, height)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat cell storage, row-major (`y * width + x`).
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads the cell at `(x, y)`.
    ///
    /// Callers must check `is_out_of_bounds` first: out-of-range
    /// coordinates panic on the backing index.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Writes `mark` at `(x, y)`, overwriting whatever was there.
    ///
    /// Occupancy is the game layer's concern, not the board's. Same
    /// bounds contract as [`Board::get`].
    pub fn set(&mut self, x: usize, y: usize, mark: Mark) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(mark);
    }

    /// Clears every cell; dimensions are unchanged.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// True iff `(x, y)` falls outside the grid.
    pub fn is_out_of_bounds(&self, x: usize, y: usize) -> bool {
        x >= self.width || y >= self.height
    }

    /// True iff the cell at `(x, y)` holds a mark.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// True iff `move_count` moves fill the grid.
    ///
    /// Takes the count as a parameter rather than scanning — the game
    /// layer already tracks it in the move history.
    pub fn is_full(&self, move_count: usize) -> bool {
        move_count >= self.width * self.height
    }

    /// True iff some row consists entirely of `mark`.
    #[instrument(skip(self))]
    pub fn is_row_win(&self, mark: Mark) -> bool {
        (0..self.height).any(|y| (0..self.width).all(|x| self.get(x, y) == Some(mark)))
    }

    /// True iff some column consists entirely of `mark`.
    #[instrument(skip(self))]
    pub fn is_column_win(&self, mark: Mark) -> bool {
        (0..self.width).any(|x| (0..self.height).all(|y| self.get(x, y) == Some(mark)))
    }

    /// True iff either diagonal consists entirely of `mark`.
    ///
    /// Only square boards have full-length diagonals; returns false
    /// otherwise. Both diagonals are scanned in one pass, bailing out
    /// once both are disproven.
    #[instrument(skip(self))]
    pub fn is_diagonal_win(&self, mark: Mark) -> bool {
        if self.width != self.height {
            return false;
        }
        let size = self.width;
        let mut main = true;
        let mut anti = true;
        for i in 0..size {
            if self.get(i, i) != Some(mark) {
                main = false;
            }
            if self.get(i, size - 1 - i) != Some(mark) {
                anti = false;
            }
            if !main && !anti {
                return false;
            }
        }
        main || anti
    }

    /// Row-major snapshot of the grid, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
