//! Conway's B3/S23 rule applied over a [`Grid`].

use crate::grid::{Grid, GridError};

/// Cell changes produced by one call to [`advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Dead cells that came alive
    pub births: u64,
    /// Live cells that died
    pub deaths: u64,
}

/// Next state of a single cell given its current state and live-neighbor count.
///
/// * A live cell with fewer than two live neighbors dies (underpopulation)
/// * A live cell with two or three live neighbors survives
/// * A live cell with more than three live neighbors dies (overpopulation)
/// * A dead cell with exactly three live neighbors becomes alive (reproduction)
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Counts the live cells among the eight neighbors of `(row, col)`.
///
/// The grid has hard edges: neighbors that would fall outside it count as
/// dead, there is no wraparound.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let (Some(ny), Some(nx)) = (row.checked_add_signed(dy), col.checked_add_signed(dx))
            else {
                continue;
            };

            if grid.get(ny, nx) == Ok(true) {
                count += 1;
            }
        }
    }
    count
}

/// Advances `grid` by one generation.
///
/// Every cell's neighbor count is taken from the current generation, the
/// results go to the scratch buffer, and the buffers are swapped only after
/// the whole sweep.
pub fn advance(grid: &mut Grid) -> Result<Outcome, GridError> {
    let mut outcome = Outcome::default();

    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let alive = grid.get(y, x)?;
            let new_state = next_state(alive, count_live_neighbors(grid, y, x));
            match (alive, new_state) {
                (false, true) => outcome.births += 1,
                (true, false) => outcome.deaths += 1,
                _ => {}
            }
            grid.set_next(y, x, new_state)?;
        }
    }

    grid.commit_generation();
    Ok(outcome)
}
