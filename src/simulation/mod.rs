pub mod cell;
pub mod grid;
pub mod interaction;
pub mod pattern;
pub mod presets;
pub mod rules;
pub mod scheduler;
pub mod seed;
pub mod session;

pub use cell::Cell;
pub use grid::Grid;
pub use pattern::{FilePatternSource, Pattern, PatternSource};
pub use scheduler::{RunMode, Scheduler};
pub use session::Session;
