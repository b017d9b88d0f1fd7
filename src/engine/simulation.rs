use crate::core::Grid;
use tracing::debug;

/// What a single step did to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Changed,
    /// No live cells remain
    Extinct,
    /// Grid identical to the previous generation
    StillLife,
}

/// A grid plus the number of generations it has advanced
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    /// Advance one generation and classify the result
    pub fn step(&mut self) -> StepOutcome {
        let previous = self.grid.clone();
        self.grid.tick();
        self.generation += 1;

        let population = self.grid.population();
        debug!(generation = self.generation, population, "tick");

        if population == 0 {
            StepOutcome::Extinct
        } else if self.grid == previous {
            StepOutcome::StillLife
        } else {
            StepOutcome::Changed
        }
    }
}
