use rand::Rng;

use crate::error::{LifeError, Result};
use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// Create a grid whose cells are independently alive with probability `density`
pub fn randomize(rows: usize, cols: usize, density: f64) -> Result<Grid> {
    randomize_with(&mut rand::thread_rng(), rows, cols, density)
}

/// Same as [`randomize`], drawing from the given generator
pub fn randomize_with<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    // Validates dimensions before any draws are made
    Grid::new(rows, cols)?;

    let cells = (0..rows * cols)
        .map(|_| Cell::from(rng.gen_bool(density)))
        .collect();

    Ok(Grid::from_cells(rows, cols, cells))
}
