use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::core::renderer::{Frame, FrameRenderer};
use crate::engine::simulation::{Simulation, StepOutcome};
use crate::engine::EngineCommand;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Pause between generations
    pub interval: Duration,
    /// Stop after this many generations; run forever when `None`
    pub max_generations: Option<u64>,
    /// Stop once the grid is extinct or a still life
    pub stop_when_settled: bool,
    /// Read Esc / q / space from the terminal between generations
    pub keyboard: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(200),
            max_generations: None,
            stop_when_settled: true,
            keyboard: true,
        }
    }
}

/// Why `LifeEngine::run` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Extinct,
    StillLife,
    Quit,
}

/// Driver loop: draw, handle input, tick, wait for the next interval
pub struct LifeEngine {
    sim: Simulation,
    config: EngineConfig,
    paused: bool,
}

impl LifeEngine {
    pub fn new(sim: Simulation, config: EngineConfig) -> Self {
        Self { sim, config, paused: false }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    fn draw<R: FrameRenderer>(&self, renderer: &mut R) -> Result<()> {
        renderer.draw(&Frame {
            grid: self.sim.grid(),
            generation: self.sim.generation(),
            paused: self.paused,
        })
    }

    pub async fn run<R: FrameRenderer>(&mut self, renderer: &mut R) -> Result<StopReason> {
        info!(
            rows = self.sim.grid().rows(),
            cols = self.sim.grid().cols(),
            population = self.sim.population(),
            "simulation started"
        );

        let mut interval = tokio::time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            self.draw(renderer)?;

            if let Some(max) = self.config.max_generations {
                if self.sim.generation() >= max {
                    return Ok(StopReason::GenerationLimit);
                }
            }

            if self.config.keyboard {
                match poll_command()? {
                    Some(EngineCommand::Quit) => return Ok(StopReason::Quit),
                    Some(EngineCommand::TogglePause) => {
                        self.paused = !self.paused;
                        debug!(paused = self.paused, "pause toggled");
                    }
                    None => {}
                }
            }

            if !self.paused {
                let outcome = self.sim.step();
                if self.config.stop_when_settled && outcome != StepOutcome::Changed {
                    info!(generation = self.sim.generation(), ?outcome, "grid settled");
                    self.draw(renderer)?;
                    return Ok(match outcome {
                        StepOutcome::Extinct => StopReason::Extinct,
                        _ => StopReason::StillLife,
                    });
                }
            }

            interval.tick().await;
        }
    }
}

/// Non-blocking read of a single key press
fn poll_command() -> Result<Option<EngineCommand>> {
    if !event::poll(Duration::from_millis(0))? {
        return Ok(None);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    Ok(match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(EngineCommand::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(EngineCommand::Quit)
        }
        KeyCode::Char(' ') => Some(EngineCommand::TogglePause),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Grid};

    /// Records the generation and rendered grid of every frame drawn
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, String)>,
    }

    impl FrameRenderer for Recorder {
        fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
            self.frames.push((frame.generation, frame.grid.render()));
            Ok(())
        }
    }

    fn config(max_generations: Option<u64>) -> EngineConfig {
        EngineConfig {
            interval: Duration::from_millis(1),
            max_generations,
            stop_when_settled: true,
            keyboard: false,
        }
    }

    fn blinker() -> Grid {
        let mut grid = Grid::new(3, 3);
        for col in 0..3 {
            grid.mark_alive(Coord::new(1, col)).unwrap();
        }
        grid
    }

    #[tokio::test]
    async fn stops_at_generation_limit() {
        let mut engine = LifeEngine::new(Simulation::new(blinker()), config(Some(3)));
        let mut recorder = Recorder::default();

        let reason = engine.run(&mut recorder).await.unwrap();

        assert_eq!(reason, StopReason::GenerationLimit);
        assert_eq!(engine.simulation().generation(), 3);
        let generations: Vec<u64> = recorder.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2, 3]);
        assert_eq!(recorder.frames[1].1, " █ \n █ \n █ ");
    }

    #[tokio::test]
    async fn zero_limit_draws_initial_frame_only() {
        let mut engine = LifeEngine::new(Simulation::new(blinker()), config(Some(0)));
        let mut recorder = Recorder::default();

        assert_eq!(engine.run(&mut recorder).await.unwrap(), StopReason::GenerationLimit);
        assert_eq!(recorder.frames.len(), 1);
    }

    #[tokio::test]
    async fn stops_when_extinct() {
        let mut grid = Grid::new(3, 3);
        grid.mark_alive(Coord::new(0, 0)).unwrap();
        let mut engine = LifeEngine::new(Simulation::new(grid), config(None));
        let mut recorder = Recorder::default();

        assert_eq!(engine.run(&mut recorder).await.unwrap(), StopReason::Extinct);
        assert_eq!(recorder.frames.last().unwrap(), &(1, "   \n   \n   ".to_string()));
    }

    #[tokio::test]
    async fn stops_on_still_life() {
        let mut grid = Grid::new(2, 2);
        for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            grid.mark_alive(Coord::new(r, c)).unwrap();
        }
        let mut engine = LifeEngine::new(Simulation::new(grid), config(None));
        let mut recorder = Recorder::default();

        assert_eq!(engine.run(&mut recorder).await.unwrap(), StopReason::StillLife);
        assert_eq!(engine.simulation().generation(), 1);
    }
}
