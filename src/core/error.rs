use std::fmt;

/// Errors raised by grid construction and cell access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Negative or overflowing dimensions, or ragged row input
    InvalidDimension { rows: i64, cols: i64 },
    /// Coordinate outside `[0, rows) x [0, cols)`
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { rows, cols } => {
                write!(f, "Invalid grid dimensions {}x{}", rows, cols)
            }
            GridError::IndexOutOfRange { row, col, rows, cols } => write!(
                f,
                "Cell ({}, {}) is out of range - grid size is {}x{}",
                row, col, rows, cols
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = GridError::IndexOutOfRange { row: 3, col: 0, rows: 3, cols: 3 };
        assert_eq!(err.to_string(), "Cell (3, 0) is out of range - grid size is 3x3");

        let err = GridError::InvalidDimension { rows: -1, cols: 4 };
        assert_eq!(err.to_string(), "Invalid grid dimensions -1x4");
    }
}
