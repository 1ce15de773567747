use clap::{Parser, ValueEnum};

use crate::error::{LifeError, Result};

/// Default grid dimensions (50x50 = 2500 cells)
pub const GRID_ROWS: usize = 50;
pub const GRID_COLS: usize = 50;

// ============================================
// Scheduling
// ============================================

/// Default interval between generations in milliseconds (10 gen/s)
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Fastest allowed interval (100 gen/s)
pub const MIN_SPEED_MS: u64 = 10;

/// Slowest allowed interval (1 gen/s)
pub const MAX_SPEED_MS: u64 = 1000;

/// Granularity of interactive speed adjustments
pub const SPEED_STEP_MS: u64 = 10;

/// Tick cadence of the terminal driver, roughly one display frame
pub const FRAME_INTERVAL_MS: u64 = 16;

// ============================================
// Seeding
// ============================================

/// Probability that a randomized cell starts alive
pub const DEFAULT_DENSITY: f64 = 0.25;

/// Generation budget for a single terminal run
pub const DEFAULT_GENERATIONS: u64 = 100;

/// Initial grid contents for a terminal run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedKind {
    /// All cells dead
    Empty,
    /// The built-in glider
    Glider,
    /// Independent random cells at `--density`
    Random,
}

/// Runtime configuration, parsed from the command line
#[derive(Clone, Debug, Parser)]
#[command(name = "life-engine", version, about = "Bounded Game of Life simulation")]
pub struct Config {
    /// Number of grid rows
    #[arg(long, default_value_t = GRID_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = GRID_COLS)]
    pub cols: usize,

    /// Milliseconds between generations (clamped to 10..=1000)
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    pub speed_ms: u64,

    /// Probability that a randomized cell starts alive
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Stop after this many committed generations
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,

    /// Initial grid contents
    #[arg(long, value_enum, default_value_t = SeedKind::Glider)]
    pub seed: SeedKind,

    /// Pattern response document (JSON) to import instead of the seed
    #[arg(long)]
    pub pattern: Option<std::path::PathBuf>,

    /// Only print the final summary
    #[arg(long)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            speed_ms: DEFAULT_SPEED_MS,
            density: DEFAULT_DENSITY,
            generations: DEFAULT_GENERATIONS,
            seed: SeedKind::Glider,
            pattern: None,
            quiet: false,
        }
    }
}

impl Config {
    /// Reject settings no session could be built from.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density));
        }
        Ok(())
    }
}
