use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("cells {0} and {1} do not share a wall")]
    InvalidEdge(usize, usize),

    #[error("id {0} was never registered in the disjoint set")]
    UnknownId(usize),

    #[error("grid must contain at least one cell, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("grid of {rows}x{columns} cells is too large")]
    InvalidSize { rows: usize, columns: usize },

    #[error("bias must be within 1..=99, got {0}")]
    InvalidBias(u8),

    #[error("backtracking stack exhausted at cell {0} with unvisited cells left")]
    StackExhausted(usize),
}
