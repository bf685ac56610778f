//! Grid tests - buffers, toggles, bounds and random seeding

use rand::{rngs::StdRng, SeedableRng};
use term_life::{Grid, GridError};

#[test]
fn test_grid_new_all_dead() {
    let grid = Grid::new(4, 6).unwrap();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 6);
    assert_eq!(grid.population(), 0);

    for row in 0..4 {
        for col in 0..6 {
            assert_eq!(grid.get(row, col), Ok(false), "({}, {}) should be dead", row, col);
        }
    }
}

#[test]
fn test_grid_new_rejects_zero_dimensions() {
    assert_eq!(
        Grid::new(0, 5).unwrap_err(),
        GridError::InvalidDimensions { rows: 0, cols: 5 }
    );
    assert_eq!(
        Grid::new(5, 0).unwrap_err(),
        GridError::InvalidDimensions { rows: 5, cols: 0 }
    );
    assert!(Grid::new(1, 1).is_ok());
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(3, 4).unwrap();
    assert_eq!(
        grid.get(3, 0),
        Err(GridError::OutOfBounds {
            row: 3,
            col: 0,
            rows: 3,
            cols: 4
        })
    );
    assert!(grid.get(0, 4).is_err());
    assert!(grid.get(2, 3).is_ok());
}

#[test]
fn test_grid_set_next_out_of_bounds() {
    let mut grid = Grid::new(3, 4).unwrap();
    assert!(grid.set_next(3, 0, true).is_err());
    assert!(grid.set_next(0, 4, true).is_err());
}

#[test]
fn test_toggle_twice_restores_cell() {
    let mut grid = Grid::new(5, 5).unwrap();

    assert_eq!(grid.toggle(2, 3), Ok(true));
    assert_eq!(grid.get(2, 3), Ok(true));
    assert_eq!(grid.toggle(2, 3), Ok(false));
    assert_eq!(grid.get(2, 3), Ok(false));
}

#[test]
fn test_toggle_out_of_bounds_leaves_grid_untouched() {
    let mut grid = Grid::new(2, 2).unwrap();
    assert!(grid.toggle(2, 0).is_err());
    assert!(grid.toggle(0, 2).is_err());
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_set_next_is_invisible_until_commit() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_next(1, 1, true).unwrap();
    assert_eq!(grid.get(1, 1), Ok(false));

    grid.commit_generation();
    assert_eq!(grid.get(1, 1), Ok(true));
}

#[test]
fn test_toggle_does_not_touch_next_generation() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.toggle(0, 0).unwrap();
    grid.commit_generation();

    // The scratch buffer was never written, so (0, 0) is dead in it.
    assert_eq!(grid.get(0, 0), Ok(false));
}

#[test]
fn test_commit_swaps_buffers() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.toggle(0, 1).unwrap();
    grid.set_next(1, 0, true).unwrap();

    grid.commit_generation();
    assert_eq!(grid.get(1, 0), Ok(true));
    assert_eq!(grid.get(0, 1), Ok(false));

    // The previous generation is now the scratch buffer.
    grid.commit_generation();
    assert_eq!(grid.get(0, 1), Ok(true));
    assert_eq!(grid.get(1, 0), Ok(false));
}

#[test]
fn test_seed_random_reaches_row_and_column_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::new(1, 1).unwrap();
    grid.seed_random(1, &mut rng);
    assert_eq!(grid.get(0, 0), Ok(true));
}

#[test]
fn test_seed_random_allows_repeats() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(10, 10).unwrap();
    grid.seed_random(30, &mut rng);

    let alive = grid.population();
    assert!(alive >= 1 && alive <= 30, "alive = {}", alive);
}

#[test]
fn test_seed_random_covers_small_grid() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::new(3, 3).unwrap();
    grid.seed_random(500, &mut rng);
    assert_eq!(grid.population(), 9);
}

#[test]
fn test_seed_random_zero_is_noop() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::new(4, 4).unwrap();
    grid.seed_random(0, &mut rng);
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_iter_cells_is_row_major() {
    let mut grid = Grid::new(2, 3).unwrap();
    grid.toggle(1, 2).unwrap();

    let cells: Vec<_> = grid.iter_cells().collect();
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[0], (0, 0, false));
    assert_eq!(cells[3], (1, 0, false));
    assert_eq!(cells[5], (1, 2, true));
}
