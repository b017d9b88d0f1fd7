//! B3/S23 transition rule, independent of any grid
use crate::core::cell::CellState;

/// Next state of a cell given its current state and live neighbor count
pub fn new_state(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
        (CellState::Dead, 3) => CellState::Alive,                          // Birth
        _ => CellState::Dead,                                              // Death or stays dead
    }
}
