pub mod cli;
pub mod core;
pub mod engine;
pub mod patterns;

// Re-export for convenience
pub use crate::core::rules::new_state;
pub use crate::core::{CellState, Coord, Grid, GridError};
