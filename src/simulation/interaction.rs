use crate::error::Result;
use crate::simulation::grid::Grid;

/// Flip a single cell, returning a new grid. The input is left untouched.
pub fn toggle(grid: &Grid, row: usize, col: usize) -> Result<Grid> {
    let cell = grid.get(row, col)?;
    grid.set(row, col, cell.toggled())
}
