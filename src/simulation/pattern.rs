use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{LifeError, Result};
use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// A pattern produced by a [`PatternSource`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    /// Any size, possibly empty or ragged
    pub grid: Vec<Vec<Cell>>,
}

/// Producer of patterns from free-text prompts.
///
/// Implementations either return a complete pattern or a
/// [`LifeError::PatternGenerationFailure`]; partial data is never handed over.
pub trait PatternSource {
    fn generate(&self, prompt: &str, rows: usize, cols: usize) -> Result<Pattern>;
}

/// Wire shape of a pattern response document
#[derive(Deserialize)]
struct PatternResponse {
    name: String,
    description: String,
    grid: Vec<Vec<i64>>,
}

/// Decode a `{"name", "description", "grid": [[0|1]]}` response document
pub fn parse_response(text: &str) -> Result<Pattern> {
    let response: PatternResponse = serde_json::from_str(text)
        .map_err(|e| LifeError::pattern_failure(format!("malformed response: {}", e)))?;

    Ok(Pattern {
        name: response.name,
        description: response.description,
        grid: response
            .grid
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from_raw).collect())
            .collect(),
    })
}

/// Reads a previously generated response document from disk.
/// The prompt and target size are ignored.
pub struct FilePatternSource {
    path: PathBuf,
}

impl FilePatternSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PatternSource for FilePatternSource {
    fn generate(&self, _prompt: &str, _rows: usize, _cols: usize) -> Result<Pattern> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            LifeError::pattern_failure(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        parse_response(&text)
    }
}

/// Center `pattern` on an empty `target_rows x target_cols` grid.
///
/// Offsets are `floor((target - pattern) / 2)` per axis and may be negative
/// for oversized patterns; cells landing outside the target are dropped.
/// The pattern width is taken from its first row, shorter or longer rows
/// place what they have.
pub fn place(target_rows: usize, target_cols: usize, pattern: &[Vec<Cell>]) -> Result<Grid> {
    let empty = Grid::new(target_rows, target_cols)?;
    let pattern_rows = pattern.len() as i64;
    let pattern_cols = pattern.first().map_or(0, Vec::len) as i64;

    let row_offset = (target_rows as i64 - pattern_rows).div_euclid(2);
    let col_offset = (target_cols as i64 - pattern_cols).div_euclid(2);

    let mut cells: Vec<Cell> = empty.iter_rows().flatten().collect();
    for (r, row) in pattern.iter().enumerate() {
        let tr = row_offset + r as i64;
        if tr < 0 || tr >= target_rows as i64 {
            continue;
        }
        for (c, &cell) in row.iter().enumerate() {
            let tc = col_offset + c as i64;
            if tc < 0 || tc >= target_cols as i64 {
                continue;
            }
            cells[tr as usize * target_cols + tc as usize] = cell;
        }
    }

    Ok(Grid::from_cells(target_rows, target_cols, cells))
}
