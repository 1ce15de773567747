use std::fmt;

use crate::error::{LifeError, Result};
use crate::simulation::cell::Cell;

/// Fixed-size grid of cells, stored row-major.
///
/// Dimensions are set at construction and never change. Every edit
/// produces a new grid; a `Grid` handed out is never modified behind
/// the holder's back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Build a grid from a rectangular matrix of cells
    pub fn from_rows(matrix: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 || matrix.iter().any(|row| row.len() != cols) {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: matrix.into_iter().flatten().collect(),
        })
    }

    /// Wrap an already-laid-out buffer. Callers guarantee `cells.len() == rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// All-dead grid of the same shape
    pub fn cleared(&self) -> Self {
        Self::from_cells(self.rows, self.cols, vec![Cell::Dead; self.cells.len()])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// A copy of this grid with one cell replaced
    pub fn set(&self, row: usize, col: usize, cell: Cell) -> Result<Self> {
        let i = self.index(row, col)?;
        let mut cells = self.cells.clone();
        cells[i] = cell;
        Ok(Self::from_cells(self.rows, self.cols, cells))
    }

    /// Lazily enumerate rows, each a lazy sequence of cells.
    /// Call again to restart.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.chunks(self.cols).map(|row| row.iter().copied())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Unchecked read for in-bounds coordinates
    #[inline]
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row.map(Cell::glyph).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(10, 20).unwrap();
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 20);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_rows().count(), 10);
        assert!(grid.iter_rows().all(|row| row.count() == 20));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.get(2, 3), Ok(Cell::Dead));
        assert_eq!(
            grid.get(3, 0),
            Err(LifeError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 4 })
        );
        assert!(grid.get(0, 4).is_err());
    }

    #[test]
    fn test_set_leaves_original_untouched() {
        let grid = Grid::new(3, 3).unwrap();
        let edited = grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(1, 2), Ok(Cell::Dead));
        assert_eq!(edited.get(1, 2), Ok(Cell::Alive));
        assert_eq!(edited.population(), 1);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Alive, Cell::Dead],
            vec![Cell::Dead, Cell::Alive],
        ])
        .unwrap();
        assert_eq!(grid.get(0, 0), Ok(Cell::Alive));
        assert_eq!(grid.get(1, 0), Ok(Cell::Dead));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert!(Grid::from_rows(vec![]).is_err());
        assert!(Grid::from_rows(vec![vec![]]).is_err());
        assert!(Grid::from_rows(vec![vec![Cell::Dead; 3], vec![Cell::Dead; 2]]).is_err());
    }

    #[test]
    fn test_value_equality() {
        let a = Grid::new(4, 4).unwrap().set(1, 1, Cell::Alive).unwrap();
        let b = Grid::new(4, 4).unwrap().set(1, 1, Cell::Alive).unwrap();
        let c = Grid::new(4, 5).unwrap().set(1, 1, Cell::Alive).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Grid::new(4, 4).unwrap());
    }

    #[test]
    fn test_row_enumeration_is_restartable() {
        let grid = Grid::new(2, 3).unwrap().set(1, 2, Cell::Alive).unwrap();
        let first: Vec<Vec<Cell>> = grid.iter_rows().map(|r| r.collect()).collect();
        let second: Vec<Vec<Cell>> = grid.iter_rows().map(|r| r.collect()).collect();
        assert_eq!(first, second);
        assert_eq!(first[1][2], Cell::Alive);
    }

    #[test]
    fn test_display() {
        let grid = Grid::new(2, 3).unwrap().set(0, 1, Cell::Alive).unwrap();
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }
}
