use anyhow::{Context, Result};
use clap::Parser;
use lifeterm::cli::Cli;
use lifeterm::core::renderer::{PlainRenderer, TuiRenderer};
use lifeterm::core::terminal::TerminalContext;
use lifeterm::engine::{LifeEngine, Simulation};
use lifeterm::patterns::PATTERNS;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the frames, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if cli.list_patterns {
        for pattern in PATTERNS {
            let (rows, cols) = pattern.size();
            println!("{:<20} {}x{}", pattern.name, rows, cols);
        }
        return Ok(());
    }

    let grid = cli.initial_grid()?;
    let mut engine = LifeEngine::new(Simulation::new(grid), cli.engine_config());

    let result = if cli.plain {
        crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut renderer = PlainRenderer::new(TerminalContext::new());
        let result = engine.run(&mut renderer).await;
        crossterm::terminal::disable_raw_mode()?;
        result
    } else {
        let mut renderer = TuiRenderer::new(ratatui::init());
        let result = engine.run(&mut renderer).await;
        ratatui::restore();
        result
    };

    let reason = result?;
    info!(?reason, generation = engine.simulation().generation(), "simulation finished");
    Ok(())
}
