use std::fmt;

/// Errors that can occur when building a graph from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The edge at this input position joins a node to itself.
    SelfLoop { index: usize },
    /// A row of an adjacency matrix has the wrong number of entries.
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A line of textual input could not be read.
    Parse { line: usize, content: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { index } => write!(f, "edge #{index} is a self-loop"),
            Self::NotSquare { row, len, expected } => write!(
                f,
                "adjacency matrix is not square: row {row} has {len} entries, expected {expected}"
            ),
            Self::Parse { line, content } => {
                write!(f, "line {line}: cannot parse \u{201c}{content}\u{201d}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
