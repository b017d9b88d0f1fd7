pub mod runner;
pub mod simulation;

pub use runner::{EngineConfig, LifeEngine, StopReason};
pub use simulation::{Simulation, StepOutcome};

/// Keyboard commands the engine reacts to between generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EngineCommand {
    Quit,
    TogglePause,
}
