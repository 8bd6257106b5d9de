use std::fmt;

/// Errors raised while building an [`OccupancyGrid`](crate::OccupancyGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A cell character other than `.`, `#` or `*`.
    UnknownCell { row: usize, col: usize, ch: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged { row, len, expected } => {
                write!(f, "grid row {row} has {len} cells, expected {expected}")
            }
            Self::UnknownCell { row, col, ch } => {
                write!(f, "unknown grid cell {ch:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for GridError {}
