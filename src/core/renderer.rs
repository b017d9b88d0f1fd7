//! Frame renderers that put a grid on screen
use anyhow::Result;
use ratatui::{
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal,
};
use std::io::Write;

use crate::core::grid::Grid;
use crate::core::terminal::TerminalContext;

/// Everything a renderer needs to draw one generation
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    pub paused: bool,
}

impl Frame<'_> {
    pub fn status_line(&self) -> String {
        format!(
            "Generation {} | Population {}{}",
            self.generation,
            self.grid.population(),
            if self.paused { " | paused" } else { "" }
        )
    }
}

/// Renderer trait the engine draws through
pub trait FrameRenderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Clear-and-print renderer writing `Grid::render()` straight to the terminal
pub struct PlainRenderer<W: Write> {
    ctx: TerminalContext<W>,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(ctx: TerminalContext<W>) -> Self {
        Self { ctx }
    }

    pub fn into_inner(self) -> W {
        self.ctx.into_inner()
    }
}

impl<W: Write> FrameRenderer for PlainRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.ctx.clear_screen()?;
        for line in frame.grid.lines() {
            self.ctx.print_line(&line)?;
        }
        self.ctx.print_line(&frame.status_line())?;
        self.ctx.flush()?;
        Ok(())
    }
}

/// Ratatui renderer: the grid inside a bordered block titled with the status line
pub struct TuiRenderer {
    terminal: DefaultTerminal,
}

impl TuiRenderer {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl FrameRenderer for TuiRenderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let text = frame.grid.render();
        let title = frame.status_line();
        self.terminal.draw(|f| {
            let block = Block::default().borders(Borders::ALL).title(title);
            f.render_widget(Paragraph::new(text).block(block), f.area());
        })?;
        Ok(())
    }
}
