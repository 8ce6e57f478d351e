//! Errors raised by maze construction and solving

use thiserror::Error;

use crate::grid::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Both dimensions must be at least one cell
    #[error("invalid maze dimensions {columns}x{rows}: columns and rows must be positive")]
    InvalidDimension { columns: usize, rows: usize },

    /// Only possible on grids the generator did not produce
    #[error("no passage leads from {from} to {to}")]
    Unreachable { from: Position, to: Position },
}
