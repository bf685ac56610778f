//! The cell grid and its double buffer.
//!
//! A [`Grid`] holds two same-shaped buffers: the current generation, which is
//! what every reader sees, and a scratch buffer that the rule engine fills with
//! the next generation. [`Grid::commit_generation`] swaps the two, so a reader
//! never observes a half-computed generation.

use rand::Rng;
use thiserror::Error;

/// Errors raised by grid construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A fixed-size board of live/dead cells with a scratch buffer for the next generation.
///
/// Cells are stored row-major in flat vectors; `true` is alive, `false` is dead.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Current generation
    cells: Vec<bool>,
    /// Next generation, written by the rule engine before a commit
    next_cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        Ok(Grid {
            rows,
            cols,
            cells: vec![false; rows * cols],
            next_cells: vec![false; rows * cols],
        })
    }

    /// Number of rows, fixed at creation.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, fixed at creation.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns whether the cell at `(row, col)` is alive in the current generation.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Flips the current-generation cell at `(row, col)` and returns its new state.
    ///
    /// The scratch buffer is left untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Writes a cell of the next generation. Invisible until [`Grid::commit_generation`].
    pub fn set_next(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.next_cells[idx] = alive;
        Ok(())
    }

    /// Makes the scratch buffer the current generation.
    ///
    /// The buffers trade places rather than being copied; the old generation
    /// becomes the scratch buffer and will be overwritten by the next sweep.
    pub fn commit_generation(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.next_cells);
    }

    /// Brings `count` randomly picked cells to life.
    ///
    /// Picks are uniform over the whole grid and may repeat; a repeated pick
    /// leaves the cell alive.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let row = rng.gen_range(0..self.rows);
            let col = rng.gen_range(0..self.cols);
            let idx = row * self.cols + col;
            self.cells[idx] = true;
        }
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|&&cell| cell).count() as u64
    }

    /// Iterates over the current generation as `(row, col, alive)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx / self.cols, idx % self.cols, alive))
    }
}
