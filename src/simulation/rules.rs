use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// Moore neighborhood offsets, excluding the cell itself
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Compute the successor generation (B3/S23).
///
/// Reads only from `grid` and writes into a freshly allocated buffer, so
/// no cell ever sees a neighbor that was already updated this generation.
/// The grid is bounded: positions past an edge do not exist and are never
/// wrapped around.
pub fn next(grid: &Grid) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut output = Vec::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let neighbors = live_neighbors(grid, r, c);
            output.push(apply_rule(grid.cell_at(r, c), neighbors));
        }
    }

    Grid::from_cells(rows, cols, output)
}

/// Count live cells among the in-bounds Moore neighbors of `(row, col)`
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if nr < grid.rows() && nc < grid.cols() && grid.cell_at(nr, nc).is_alive() {
            count += 1;
        }
    }
    count
}

#[inline]
fn apply_rule(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        alive.iter().fold(Grid::new(rows, cols).unwrap(), |g, &(r, c)| {
            g.set(r, c, Cell::Alive).unwrap()
        })
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in grid.iter_rows().enumerate() {
            for (c, cell) in row.enumerate() {
                if cell.is_alive() {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(next(&grid), Grid::new(3, 3).unwrap());
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(next(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next(&horizontal), vertical);
        assert_eq!(next(&vertical), horizontal);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
        let mut grid = grid_with(10, 10, &glider);
        for _ in 0..4 {
            grid = next(&grid);
        }

        let expected: Vec<(usize, usize)> = {
            let mut shifted: Vec<_> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
            shifted.sort();
            shifted
        };
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn test_corner_does_not_wrap() {
        let grid = grid_with(4, 4, &[(0, 0)]);
        assert_eq!(live_neighbors(&grid, 0, 0), 0);

        // Cells on the opposite edges would be neighbors on a torus
        let edges = grid_with(4, 4, &[(0, 0), (0, 3), (3, 0), (3, 3)]);
        assert_eq!(live_neighbors(&edges, 0, 0), 0);
        assert_eq!(next(&grid).population(), 0);
    }

    #[test]
    fn test_corner_has_three_candidates() {
        #[rustfmt::skip]
        let full = grid_with(3, 3, &[
            (0, 0), (0, 1), (0, 2),
            (1, 0), (1, 1), (1, 2),
            (2, 0), (2, 1), (2, 2),
        ]);
        assert_eq!(live_neighbors(&full, 0, 0), 3);
        assert_eq!(live_neighbors(&full, 0, 1), 5);
        assert_eq!(live_neighbors(&full, 1, 1), 8);
    }

    #[test]
    fn test_birth_on_exactly_three() {
        let grid = grid_with(3, 3, &[(0, 0), (0, 2), (2, 0)]);
        assert_eq!(next(&grid).get(1, 1), Ok(Cell::Alive));

        let four = grid_with(3, 3, &[(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert_eq!(next(&four).get(1, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_overpopulation() {
        let grid = grid_with(3, 3, &[(1, 1), (0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(next(&grid).get(1, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_next_is_deterministic() {
        let grid = grid_with(8, 8, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3), (6, 6), (6, 7)]);
        let first = next(&next(&grid));
        let second = next(&next(&grid));
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(next(&grid), Grid::new(1, 1).unwrap());
    }
}
