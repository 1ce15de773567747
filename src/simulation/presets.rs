use crate::error::Result;
use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// Live cells of the built-in glider, heading down and to the right
pub const GLIDER: [(usize, usize); 5] = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

/// Empty grid with the glider in its top-left corner.
/// On grids too small to hold it, out-of-range cells are left out.
pub fn glider(rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    for (r, c) in GLIDER {
        if r < rows && c < cols {
            grid = grid.set(r, c, Cell::Alive)?;
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_cells() {
        let grid = glider(10, 10).unwrap();
        assert_eq!(grid.population(), 5);
        for (r, c) in GLIDER {
            assert_eq!(grid.get(r, c), Ok(Cell::Alive));
        }
    }

    #[test]
    fn test_glider_clipped_on_tiny_grid() {
        // Only (1, 2) fits inside 3x3
        let grid = glider(3, 3).unwrap();
        assert_eq!(grid.population(), 1);
        assert_eq!(grid.get(1, 2), Ok(Cell::Alive));
    }
}
