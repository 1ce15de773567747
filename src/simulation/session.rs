use std::time::Duration;

use crate::error::Result;
use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;
use crate::simulation::interaction;
use crate::simulation::pattern::{self, Pattern, PatternSource};
use crate::simulation::rules;
use crate::simulation::scheduler::{RunMode, Scheduler};
use crate::simulation::seed;

/// One simulation session: the live grid, its generation counter and
/// the clock that advances it.
///
/// Owned by a single controller; renderers and input handlers work
/// through a reference to it. Grid replacement is a single assignment,
/// so readers only ever see a complete generation.
pub struct Session {
    grid: Grid,
    generation: u64,
    scheduler: Scheduler,
}

impl Session {
    /// Empty, stopped session
    pub fn new(rows: usize, cols: usize, speed: Duration) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            generation: 0,
            scheduler: Scheduler::new(speed),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> RunMode {
        self.scheduler.mode()
    }

    pub fn speed(&self) -> Duration {
        self.scheduler.interval()
    }

    pub fn generations_per_second(&self) -> u64 {
        self.scheduler.generations_per_second()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance the clock. Returns the new generation number if one was
    /// committed by this tick.
    pub fn tick(&mut self, elapsed: Duration) -> Option<u64> {
        if self.scheduler.tick(elapsed) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Advance exactly one generation while halted. Ignored while running
    /// so a generation is never committed twice in the same instant.
    pub fn step(&mut self) -> Option<u64> {
        if self.mode() == RunMode::Running {
            log::debug!("Step ignored while running");
            return None;
        }
        Some(self.advance())
    }

    pub fn start(&mut self) {
        self.scheduler.start();
        log::info!("Simulation running at {} gen/s", self.generations_per_second());
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
        log::info!("Simulation paused at generation {}", self.generation);
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
        log::info!("Simulation stopped at generation {}", self.generation);
    }

    /// Start/pause control
    pub fn toggle_running(&mut self) {
        if self.mode() == RunMode::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Change the generation interval without interrupting the loop
    pub fn set_speed(&mut self, speed: Duration) -> Duration {
        let applied = self.scheduler.set_interval(speed);
        log::info!(
            "Speed set to {}ms ({} gen/s)",
            applied.as_millis(),
            self.generations_per_second()
        );
        applied
    }

    /// Flip one cell by hand. The generation counter is kept; on error
    /// the grid is left as it was.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        match interaction::toggle(&self.grid, row, col) {
            Ok(grid) => {
                self.grid = grid;
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected toggle: {}", e);
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.replace(self.grid.cleared());
        log::info!("Grid cleared");
    }

    pub fn randomize(&mut self, density: f64) -> Result<()> {
        let grid = seed::randomize(self.grid.rows(), self.grid.cols(), density)?;
        self.replace(grid);
        log::info!("Grid randomized at density {:.2}, population {}", density, self.population());
        Ok(())
    }

    /// Replace the grid wholesale. A grid of another shape is centered
    /// and clipped like an imported pattern.
    pub fn load(&mut self, grid: Grid) -> Result<()> {
        if grid.rows() != self.grid.rows() || grid.cols() != self.grid.cols() {
            // Re-center rather than resize the session
            let matrix: Vec<Vec<_>> = grid.iter_rows().map(|r| r.collect()).collect();
            return self.import_matrix(&matrix);
        }
        self.replace(grid);
        Ok(())
    }

    /// Center a decoded pattern on the grid
    pub fn import(&mut self, pattern: &Pattern) -> Result<()> {
        self.import_matrix(&pattern.grid)?;
        log::info!(
            "Imported pattern '{}': {} (population {})",
            pattern.name,
            pattern.description,
            self.population()
        );
        Ok(())
    }

    /// Ask `source` for a pattern and import it. A failed generation is
    /// returned without touching the grid, counter or run mode.
    pub fn import_from<S: PatternSource + ?Sized>(
        &mut self,
        source: &S,
        prompt: &str,
    ) -> Result<()> {
        let pattern = source
            .generate(prompt, self.grid.rows(), self.grid.cols())
            .map_err(|e| {
                log::warn!("Pattern import failed: {}", e);
                e
            })?;
        self.import(&pattern)
    }

    fn import_matrix(&mut self, matrix: &[Vec<Cell>]) -> Result<()> {
        let grid = pattern::place(self.grid.rows(), self.grid.cols(), matrix)?;
        self.replace(grid);
        Ok(())
    }

    fn advance(&mut self) -> u64 {
        self.grid = rules::next(&self.grid);
        self.generation += 1;
        log::debug!("Generation {} committed, population {}", self.generation, self.population());
        self.generation
    }

    /// Wholesale replacement: halts the loop and restarts counting
    fn replace(&mut self, grid: Grid) {
        self.scheduler.stop();
        self.grid = grid;
        self.generation = 0;
    }
}
