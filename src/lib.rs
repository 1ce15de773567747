//! Bounded Game of Life engine: grid model, B3/S23 transition, seeding,
//! centered pattern import and a variable-rate generation scheduler.

pub mod app;
pub mod config;
pub mod error;
pub mod simulation;

pub use error::{LifeError, Result};
