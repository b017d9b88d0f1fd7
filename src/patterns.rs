use crate::core::{Coord, Grid, GridError};

/// A named seed pattern. Cells are offsets from the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "gosper-glider-gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Look a pattern up by name, ignoring case
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Clear the grid and place the pattern in its centre.
    ///
    /// Fails with `IndexOutOfRange` without touching the grid when the pattern does not fit.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (h, w) = self.size();
        let top = grid.rows().saturating_sub(h) / 2;
        let left = grid.cols().saturating_sub(w) / 2;

        let coords: Vec<Coord> = self
            .cells
            .iter()
            .map(|&(r, c)| Coord::new(top + r, left + c))
            .collect();
        for &coord in &coords {
            grid.get(coord)?;
        }

        grid.clear();
        for coord in coords {
            grid.mark_alive(coord)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    #[test]
    fn names_are_unique() {
        for (i, p) in PATTERNS.iter().enumerate() {
            assert!(PATTERNS[i + 1..].iter().all(|q| q.name != p.name), "{}", p.name);
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("Glider").map(|p| p.name), Some("glider"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn sizes() {
        assert_eq!(find("block").unwrap().size(), (2, 2));
        assert_eq!(find("blinker").unwrap().size(), (1, 3));
        assert_eq!(find("gosper-glider-gun").unwrap().size(), (9, 36));
    }

    #[test]
    fn apply_centres_the_pattern() {
        let mut grid = Grid::new(5, 5);
        grid.mark_alive(Coord::new(0, 0)).unwrap();
        find("blinker").unwrap().apply(&mut grid).unwrap();

        assert_eq!(grid.render(), "     \n     \n ███ \n     \n     ");
        assert_eq!(grid.get(Coord::new(0, 0)), Ok(CellState::Dead));
    }

    #[test]
    fn apply_rejects_small_grids() {
        let mut grid = Grid::new(3, 3);
        grid.mark_alive(Coord::new(1, 1)).unwrap();
        let err = find("gosper-glider-gun").unwrap().apply(&mut grid);

        assert!(matches!(err, Err(GridError::IndexOutOfRange { .. })));
        assert_eq!(grid.population(), 1);
    }
}
