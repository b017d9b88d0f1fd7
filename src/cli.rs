use anyhow::{anyhow, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{info, Level};

use crate::core::Grid;
use crate::engine::EngineConfig;
use crate::patterns::{self, PATTERNS};

#[derive(Parser, Debug)]
#[command(name = "lifeterm")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version)]
pub struct Cli {
    /// Number of grid rows
    #[arg(short, long, default_value_t = 35)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = 80)]
    pub cols: usize,

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 200)]
    pub interval_ms: u64,

    /// Stop after this many generations (runs until quit when omitted)
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Seed for a reproducible random start
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Chance of each cell starting alive
    #[arg(short, long, default_value_t = 0.5)]
    pub density: f64,

    /// Start from a named pattern instead of random cells
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Keep running after the grid dies out or stops changing
    #[arg(long)]
    pub keep_going: bool,

    /// Clear-and-print output instead of the ratatui view
    #[arg(long)]
    pub plain: bool,

    /// List available patterns and exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            interval: Duration::from_millis(self.interval_ms),
            max_generations: self.generations,
            stop_when_settled: !self.keep_going,
            keyboard: true,
        }
    }

    /// Build the starting grid from a pattern or random cells
    pub fn initial_grid(&self) -> Result<Grid> {
        let mut grid = Grid::with_size(self.rows, self.cols)?;

        if let Some(name) = &self.pattern {
            let pattern = patterns::find(name).ok_or_else(|| {
                let names: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
                anyhow!("Pattern '{}' not found! Available: {}", name, names.join(", "))
            })?;
            pattern.apply(&mut grid)?;
            info!(pattern = pattern.name, "seeded from pattern");
            return Ok(grid);
        }

        match self.seed {
            Some(seed) => {
                grid.random_seed_with_density(&mut StdRng::seed_from_u64(seed), self.density)
            }
            None => grid.random_seed_with_density(&mut rand::rng(), self.density),
        }
        info!(seed = ?self.seed, density = self.density, population = grid.population(), "seeded randomly");
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lifeterm").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!((cli.rows, cli.cols), (35, 80));
        assert_eq!(cli.engine_config().interval, Duration::from_millis(200));
        assert_eq!(cli.engine_config().max_generations, None);
        assert!(cli.engine_config().stop_when_settled);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert!(Cli::try_parse_from(["lifeterm", "--rows", "-3"]).is_err());
    }

    #[test]
    fn oversized_dimensions_are_an_error() {
        let rows = (usize::MAX / 2 + 1).to_string();
        let err = parse(&["--rows", rows.as_str(), "--cols", "2", "--pattern", "block"])
            .initial_grid()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::InvalidDimension { .. })
        ));

        let err = parse(&["--rows", rows.as_str(), "--cols", "4", "--seed", "1"])
            .initial_grid()
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid grid dimensions"));
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-vvvv"]).log_level(), Level::TRACE);
    }

    #[test]
    fn seeded_grids_are_reproducible() {
        let cli = parse(&["--rows", "10", "--cols", "12", "--seed", "42"]);
        assert_eq!(cli.initial_grid().unwrap(), cli.initial_grid().unwrap());
    }

    #[test]
    fn pattern_seeding() {
        let grid = parse(&["--rows", "6", "--cols", "6", "--pattern", "glider"])
            .initial_grid()
            .unwrap();
        assert_eq!(grid.population(), 5);

        let err = parse(&["--pattern", "nope"]).initial_grid().unwrap_err();
        assert!(err.to_string().contains("glider"));

        assert!(parse(&["--rows", "2", "--cols", "2", "--pattern", "glider"])
            .initial_grid()
            .is_err());
    }
}
