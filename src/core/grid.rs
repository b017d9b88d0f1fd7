//! Finite, non-wrapping Game of Life grid stored as a flat row-major buffer
use std::fmt;

use rand::Rng;
use rand_core::RngCore;

use crate::core::cell::{CellState, Coord};
use crate::core::error::GridError;
use crate::core::rules;

/// Offsets of the eight cells sharing an edge or corner
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `rows x cols` grid with every cell dead. Zero dimensions give an empty grid.
    ///
    /// Panics when `rows * cols` overflows `usize`; use `Grid::with_size` to get an error instead.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::with_size(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible constructor: `InvalidDimension` when `rows * cols` overflows `usize`
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows.checked_mul(cols).ok_or(GridError::InvalidDimension {
            rows: i64::try_from(rows).unwrap_or(i64::MAX),
            cols: i64::try_from(cols).unwrap_or(i64::MAX),
        })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Checked constructor for dimensions coming from signed input
    pub fn try_new(rows: i64, cols: i64) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimension { rows, cols };
        let r = usize::try_from(rows).map_err(|_| invalid.clone())?;
        let c = usize::try_from(cols).map_err(|_| invalid.clone())?;
        Self::with_size(r, c).map_err(|_| invalid)
    }

    /// Build a grid from explicit rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(GridError::InvalidDimension {
                rows: rows.len() as i64,
                cols: bad.len() as i64,
            });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.row < self.rows && coord.col < self.cols {
            Ok(coord.row * self.cols + coord.col)
        } else {
            Err(GridError::IndexOutOfRange {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<CellState, GridError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = state;
        Ok(())
    }

    pub fn mark_alive(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set(coord, CellState::Alive)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coord::new(i / cols, i % cols), state))
    }

    /// In-bounds coordinates adjacent to `coord`. Corners yield 3, edges 5, interior 8.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row.checked_add_signed(dr)?;
            let col = coord.col.checked_add_signed(dc)?;
            (row < self.rows && col < self.cols).then_some(Coord::new(row, col))
        })
    }

    pub fn live_neighbors(&self, coord: Coord) -> Result<u8, GridError> {
        self.index(coord)?;
        Ok(self.count_live_neighbors(coord))
    }

    fn count_live_neighbors(&self, coord: Coord) -> u8 {
        self.neighbors(coord)
            .filter(|n| self.cells[n.row * self.cols + n.col].is_alive())
            .count() as u8
    }

    /// Advance one generation. Every cell of the next generation is computed from the
    /// current buffer only, then the buffers are swapped.
    pub fn tick(&mut self) {
        let next: Vec<CellState> = (0..self.cells.len())
            .map(|i| {
                let coord = Coord::new(i / self.cols, i % self.cols);
                rules::new_state(self.cells[i], self.count_live_neighbors(coord))
            })
            .collect();

        self.cells = next;
    }

    /// Independently set each cell alive with probability 1/2
    pub fn random_seed<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.random_seed_with_density(rng, 0.5);
    }

    /// Independently set each cell alive with probability `density` (clamped to `[0, 1]`)
    pub fn random_seed_with_density<R: RngCore + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let p = if density.is_nan() { 0.5 } else { density.clamp(0.0, 1.0) };
        for cell in self.cells.iter_mut() {
            *cell = CellState::from(rng.random_bool(p));
        }
    }

    /// One line per row, one glyph per cell, no trailing newline
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    /// Rendered rows without separators
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        // a zero-column grid still has `rows` empty lines, so no chunks() here
        (0..self.rows).map(move |r| {
            self.cells[r * self.cols..(r + 1) * self.cols]
                .iter()
                .map(|c| c.glyph())
                .collect()
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
