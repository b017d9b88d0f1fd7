//! Terminal context for the plain renderer: cursor, clearing and buffered line output
use crossterm::{cursor, terminal, QueueableCommand};
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
}

impl TerminalContext<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalContext<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Clear the entire screen and home the cursor
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Print a line ending in `\r\n` so output stays aligned in raw mode
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}\r\n", text)
    }

    /// Flush everything queued for this frame
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
