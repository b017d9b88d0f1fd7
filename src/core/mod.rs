pub mod cell;
pub mod error;
pub mod grid;
pub mod rules;

pub mod renderer; // Frame renderers (plain + ratatui)
pub mod terminal; // Terminal context wrapper

pub use cell::{CellState, Coord};
pub use error::GridError;
pub use grid::Grid;
