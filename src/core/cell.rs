//! Cell state and coordinate value types shared by the grid engine

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub const ALIVE_GLYPH: char = '\u{2588}';
    pub const DEAD_GLYPH: char = ' ';

    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Glyph used by `Grid::render`
    pub fn glyph(self) -> char {
        match self {
            CellState::Alive => Self::ALIVE_GLYPH,
            CellState::Dead => Self::DEAD_GLYPH,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// Grid position. `row` picks the line, `col` the glyph within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
